use std::str::FromStr;

use derive_more::{Display, Into};

/// Measured values of a set. None of the list operations look into these.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SetPayload {
    pub weight: Option<Weight>,
    pub reps: Option<Reps>,
    pub time: Option<Time>,
    pub distance: Option<Distance>,
    pub completed: bool,
}

/// Weight in kg, entered in steps of 0.1.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, MeasureError> {
        check_range(Measure::Weight, &value, 999.9)?;
        if (value * 10.0).fract().abs() > f32::EPSILON {
            return Err(MeasureError::InvalidResolution(Measure::Weight));
        }
        Ok(Self(value))
    }
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, MeasureError> {
        check_range(Measure::Reps, &value, 999)?;
        Ok(Self(value))
    }
}

/// Duration of a timed set in seconds.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd)]
pub struct Time(u32);

impl Time {
    pub fn new(value: u32) -> Result<Self, MeasureError> {
        check_range(Measure::Time, &value, 9999)?;
        Ok(Self(value))
    }
}

/// Distance in metres.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Distance(f32);

impl Distance {
    pub fn new(value: f32) -> Result<Self, MeasureError> {
        check_range(Measure::Distance, &value, 999_999.0)?;
        Ok(Self(value))
    }
}

macro_rules! parse_measure {
    ($($measure: ident),*) => {
        $(
            impl TryFrom<&str> for $measure {
                type Error = MeasureError;

                fn try_from(value: &str) -> Result<Self, Self::Error> {
                    Self::new(parse(Measure::$measure, value)?)
                }
            }
        )*
    };
}

parse_measure!(Weight, Reps, Time, Distance);

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Weight,
    Reps,
    Time,
    Distance,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureError {
    #[error("{0} is out of range")]
    OutOfRange(Measure),
    #[error("{0} must be a multiple of 0.1")]
    InvalidResolution(Measure),
    #[error("{0} must be a number")]
    ParseError(Measure),
}

fn check_range<T: Default + PartialOrd>(
    measure: Measure,
    value: &T,
    max: T,
) -> Result<(), MeasureError> {
    if (T::default()..=max).contains(value) {
        Ok(())
    } else {
        Err(MeasureError::OutOfRange(measure))
    }
}

fn parse<T: FromStr>(measure: Measure, value: &str) -> Result<T, MeasureError> {
    value
        .trim()
        .parse()
        .map_err(|_| MeasureError::ParseError(measure))
}
