//! CSS length values shared by avatar sizing, outlines, and status item placement.
//!
//! Arithmetic folds terms of the same unit into a single number and only falls back to a CSS
//! `calc()` expression when mixed units (or opaque expressions) are involved, so pixel-only
//! layouts stay numerically inspectable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// A linear CSS dimension.
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Root font-size relative units.
    Rem(f64),
    /// Element font-size relative units.
    Em(f64),
    /// Percentage of the containing block.
    Percent(f64),
    /// Opaque CSS expression such as `var(--avatar-size)` or a `calc()` result.
    Expr(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors produced while parsing a [`Length`] from text.
pub enum LengthParseError {
    /// Input was empty or whitespace.
    #[error("length is empty")]
    Empty,
    /// The numeric prefix could not be parsed.
    #[error("invalid length number `{0}`")]
    InvalidNumber(String),
    /// The numeric prefix parsed but was NaN or infinite.
    #[error("length `{0}` is not finite")]
    NonFinite(String),
    /// The unit suffix is not one of `px`, `rem`, `em`, or `%`.
    #[error("unknown length unit `{0}`")]
    UnknownUnit(String),
}

impl Length {
    /// Zero pixels.
    pub const ZERO: Length = Length::Px(0.0);

    /// Returns the pixel value when the length is expressed in pixels.
    pub fn as_px(&self) -> Option<f64> {
        match self {
            Self::Px(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns `true` for numeric lengths equal to zero, regardless of unit.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Px(value) | Self::Rem(value) | Self::Em(value) | Self::Percent(value) => {
                *value == 0.0
            }
            Self::Expr(_) => false,
        }
    }

    /// CSS text for the length.
    pub fn to_css(&self) -> String {
        match self {
            Self::Px(value) => format!("{value}px"),
            Self::Rem(value) => format!("{value}rem"),
            Self::Em(value) => format!("{value}em"),
            Self::Percent(value) => format!("{value}%"),
            Self::Expr(expr) => expr.clone(),
        }
    }

    /// Adds two lengths, folding like units.
    pub fn add(&self, other: &Length) -> Length {
        Length::sum([self, other])
    }

    /// Sums any number of lengths.
    ///
    /// Terms sharing a unit are folded numerically and zero terms are dropped. When more than
    /// one distinct term remains the result is a single `calc()` expression.
    pub fn sum<'a>(terms: impl IntoIterator<Item = &'a Length>) -> Length {
        let mut px = 0.0;
        let mut rem = 0.0;
        let mut em = 0.0;
        let mut percent = 0.0;
        let mut exprs = Vec::new();
        for term in terms {
            match term {
                Self::Px(value) => px += value,
                Self::Rem(value) => rem += value,
                Self::Em(value) => em += value,
                Self::Percent(value) => percent += value,
                Self::Expr(expr) => exprs.push(expr.clone()),
            }
        }

        let mut parts: Vec<Length> = [
            Self::Px(px),
            Self::Rem(rem),
            Self::Em(em),
            Self::Percent(percent),
        ]
        .into_iter()
        .filter(|part| !part.is_zero())
        .collect();
        parts.extend(exprs.into_iter().map(Self::Expr));

        match parts.len() {
            0 => Self::ZERO,
            1 => parts.remove(0),
            _ => {
                let joined = parts
                    .iter()
                    .map(Length::to_css)
                    .collect::<Vec<_>>()
                    .join(" + ");
                Self::Expr(format!("calc({joined})"))
            }
        }
    }

    /// Multiplies the length by a unitless factor.
    pub fn scale(&self, factor: f64) -> Length {
        match self {
            Self::Px(value) => Self::Px(value * factor),
            Self::Rem(value) => Self::Rem(value * factor),
            Self::Em(value) => Self::Em(value * factor),
            Self::Percent(value) => Self::Percent(value * factor),
            Self::Expr(expr) => {
                let operand = expr
                    .strip_prefix("calc(")
                    .and_then(|inner| inner.strip_suffix(')'))
                    .map(|inner| format!("({inner})"))
                    .unwrap_or_else(|| expr.clone());
                Self::Expr(format!("calc({operand} * {factor})"))
            }
        }
    }

    /// Half of the length.
    pub fn half(&self) -> Length {
        self.scale(0.5)
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Length {
    type Err = LengthParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(LengthParseError::Empty);
        }

        let split = raw
            .find(|ch: char| !(ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+')))
            .unwrap_or(raw.len());
        let (number, unit) = raw.split_at(split);
        if number.is_empty() {
            return Ok(Self::Expr(raw.to_string()));
        }

        let value = number
            .parse::<f64>()
            .map_err(|_| LengthParseError::InvalidNumber(number.to_string()))?;
        if !value.is_finite() {
            return Err(LengthParseError::NonFinite(raw.to_string()));
        }

        match unit.trim() {
            "" | "px" => Ok(Self::Px(value)),
            "rem" => Ok(Self::Rem(value)),
            "em" => Ok(Self::Em(value)),
            "%" => Ok(Self::Percent(value)),
            other => Err(LengthParseError::UnknownUnit(other.to_string())),
        }
    }
}

impl TryFrom<String> for Length {
    type Error = LengthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Length> for String {
    fn from(value: Length) -> Self {
        value.to_css()
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Self::Px(value)
    }
}

impl From<i32> for Length {
    fn from(value: i32) -> Self {
        Self::Px(f64::from(value))
    }
}

impl From<&str> for Length {
    /// Lossy conversion used by component props; invalid input is kept as an opaque expression.
    fn from(value: &str) -> Self {
        value.parse().unwrap_or_else(|err| {
            leptos::logging::warn!("avatar length `{value}` kept verbatim: {err}");
            Self::Expr(value.trim().to_string())
        })
    }
}
