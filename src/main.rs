fn main() {
  liquidscribe::main();
}
