use std::cmp::Ordering;
use std::fmt;

pub type Batch = arrow::record_batch::RecordBatch;
pub type Batches = Vec<Batch>;

/// A numeric cell value or range bound.
///
/// Integers and floats compare by their exact mathematical value, so an
/// `i64` above 2^53 is never rounded before being compared.
#[derive(Debug, Clone, Copy)]
pub enum Value {
    Integer(i64),
    Float(f64),
}

/// 2^63, the first float above every `i64`.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Exact ordering of an integer against a float. `None` for `NaN`.
fn cmp_integer_float(int: i64, float: f64) -> Option<Ordering> {
    // Rounding to the nearest float is monotonic, so a strict ordering of the
    // rounded value holds for the integer itself.
    match (int as f64).partial_cmp(&float)? {
        Ordering::Equal if float >= I64_UPPER => Some(Ordering::Less),
        // `float` is integral and within range here.
        Ordering::Equal => Some(int.cmp(&(float as i64))),
        other => Some(other),
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(&b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(&b),
            (Value::Integer(a), Value::Float(b)) => cmp_integer_float(a, b),
            (Value::Float(a), Value::Integer(b)) => {
                cmp_integer_float(b, a).map(Ordering::reverse)
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
        }
    }
}
