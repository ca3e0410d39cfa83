use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CastError {
    #[error("cannot cast {input:?} to {target}")]
    Unparseable {
        input: String,
        target: &'static str,
    },
    #[error("variant index {index} out of range, type has {count} variants")]
    IndexOutOfRange { index: usize, count: usize },
}

/// parse input into any FromStr type, normalizing the error. whitespace
/// around the value is tolerated
pub fn cast<T: FromStr>(input: &str) -> Result<T, CastError> {
    input.trim().parse().map_err(|_| CastError::Unparseable {
        input: input.to_owned(),
        target: std::any::type_name::<T>(),
    })
}

/// cast to bool. accepts true/false in any case, or an integer where 0 is
/// false and anything else is true
pub fn cast_bool(input: &str) -> Result<bool, CastError> {
    if let Ok(numeric) = input.trim().parse::<i64>() {
        return Ok(numeric != 0);
    }
    if input.trim().eq_ignore_ascii_case("true") {
        return Ok(true);
    }
    if input.trim().eq_ignore_ascii_case("false") {
        return Ok(false);
    }
    Err(CastError::Unparseable {
        input: input.to_owned(),
        target: "bool",
    })
}

/// enum-like types that can list every value, in declaration order
pub trait Variants: Sized + 'static {
    const ALL: &'static [Self];
}

/// cast to an enum: by name first, then by position in Variants::ALL when
/// the input is an integer instead of a name
pub fn cast_variant<T: FromStr + Variants + Clone>(input: &str) -> Result<T, CastError> {
    if let Ok(parsed) = input.parse::<T>() {
        return Ok(parsed);
    }
    let index = input
        .trim()
        .parse::<usize>()
        .map_err(|_| CastError::Unparseable {
            input: input.to_owned(),
            target: std::any::type_name::<T>(),
        })?;
    T::ALL
        .get(index)
        .cloned()
        .ok_or(CastError::IndexOutOfRange {
            index,
            count: T::ALL.len(),
        })
}
