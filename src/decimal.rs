use {super::*, crate::error::InvalidFundingReference};

#[derive(Debug, PartialEq, Copy, Clone)]
pub(crate) struct Decimal {
  value: u128,
  scale: u8,
}

impl Decimal {
  const PRECISION: u8 = 8;

  pub(crate) fn to_sat(self) -> Result<u64, InscriptionError> {
    let Some(difference) = Self::PRECISION.checked_sub(self.scale) else {
      return InvalidFundingReference {
        reason: format!("amount has more than {} decimal places", Self::PRECISION),
      }
      .fail();
    };

    self
      .value
      .checked_mul(10u128.pow(difference.into()))
      .and_then(|value| u64::try_from(value).ok())
      .ok_or_else(|| {
        InvalidFundingReference {
          reason: "amount out of range",
        }
        .build()
      })
  }
}

impl Display for Decimal {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let magnitude = 10u128.pow(self.scale.into());

    let integer = self.value / magnitude;
    let mut fraction = self.value % magnitude;

    write!(f, "{integer}")?;

    if fraction > 0 {
      let mut width = usize::from(self.scale);

      while fraction % 10 == 0 {
        fraction /= 10;
        width -= 1;
      }

      write!(f, ".{fraction:0>width$}")?;
    }

    Ok(())
  }
}

impl FromStr for Decimal {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if let Some((integer, decimal)) = s.split_once('.') {
      if integer.is_empty() && decimal.is_empty() {
        bail!("empty decimal");
      }

      ensure!(
        decimal.chars().all(|c| c.is_ascii_digit()),
        "invalid decimal: {s}"
      );

      let integer: u128 = if integer.is_empty() {
        0
      } else {
        integer.parse()?
      };

      let trailing_zeros = decimal.chars().rev().take_while(|c| *c == '0').count();
      let significant = &decimal[..decimal.len() - trailing_zeros];

      let (value, scale) = if significant.is_empty() {
        (0, 0)
      } else {
        (significant.parse::<u128>()?, u8::try_from(significant.len())?)
      };

      Ok(Self {
        value: integer
          .checked_mul(10u128.checked_pow(scale.into()).context("excessive scale")?)
          .context("excessive value")?
          .checked_add(value)
          .context("excessive value")?,
        scale,
      })
    } else {
      Ok(Self {
        value: s.parse()?,
        scale: 0,
      })
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[track_caller]
  fn case(s: &str, value: u128, scale: u8) {
    assert_eq!(s.parse::<Decimal>().unwrap(), Decimal { value, scale });
  }

  #[test]
  fn from_str() {
    case("0", 0, 0);
    case("0.", 0, 0);
    case(".0", 0, 0);
    case("1", 1, 0);
    case("1.0", 1, 0);
    case("1.1", 11, 1);
    case("1.10", 11, 1);
    case("1.23456789", 123456789, 8);
    case("123.456", 123456, 3);
    assert!("".parse::<Decimal>().is_err());
    assert!(".".parse::<Decimal>().is_err());
    assert!("a.b".parse::<Decimal>().is_err());
    assert!("1.2.3".parse::<Decimal>().is_err());
    assert!("-1".parse::<Decimal>().is_err());
  }

  #[test]
  fn to_sat() {
    assert_eq!("1".parse::<Decimal>().unwrap().to_sat().unwrap(), 100_000_000);
    assert_eq!("0.5".parse::<Decimal>().unwrap().to_sat().unwrap(), 50_000_000);
    assert_eq!(
      "1.23456789".parse::<Decimal>().unwrap().to_sat().unwrap(),
      123_456_789
    );
    assert_eq!(
      "0.00000001".parse::<Decimal>().unwrap().to_sat().unwrap(),
      1
    );
  }

  #[test]
  fn to_sat_rejects_excess_precision() {
    assert_eq!(
      "0.123456789"
        .parse::<Decimal>()
        .unwrap()
        .to_sat()
        .unwrap_err()
        .to_string(),
      "invalid funding reference: amount has more than 8 decimal places",
    );
  }

  #[test]
  fn to_sat_rejects_out_of_range_amounts() {
    assert!("200000000000".parse::<Decimal>().unwrap().to_sat().is_err());
  }

  #[test]
  fn display() {
    assert_eq!("1.10".parse::<Decimal>().unwrap().to_string(), "1.1");
    assert_eq!("1.23456789".parse::<Decimal>().unwrap().to_string(), "1.23456789");
    assert_eq!("100".parse::<Decimal>().unwrap().to_string(), "100");
    assert_eq!("0.01".parse::<Decimal>().unwrap().to_string(), "0.01");
  }
}
