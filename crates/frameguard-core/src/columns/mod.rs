use std::fmt;
use std::str::FromStr;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute;
use arrow::datatypes::{DataType, Float64Type, Int64Type};
use arrow_array::{BooleanArray, Float64Array, Int64Array, StringArray};

use crate::errors::{TableError, UnknownColumnType};
use crate::types::Value;


/// Element type of a column, shared by schema declarations and column storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Integer,
    Float,
    String,
    Boolean,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::String => "string",
            ColumnType::Boolean => "boolean",
        }
    }

    /// Whether range bounds can be checked against this type.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = UnknownColumnType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "integer" | "int" | "int64" => Ok(ColumnType::Integer),
            "float" | "float64" | "double" => Ok(ColumnType::Float),
            "string" | "str" | "utf8" => Ok(ColumnType::String),
            "boolean" | "bool" => Ok(ColumnType::Boolean),
            _ => Err(UnknownColumnType(s.to_string())),
        }
    }
}

/// Numbers accepted as range bounds.
///
/// Integers stay integers so bounds on `i64` columns are compared exactly.
pub trait NumericType: Copy {
    fn to_value(self) -> Value;
}

impl NumericType for i32 {
    fn to_value(self) -> Value {
        Value::Integer(self as i64)
    }
}

impl NumericType for i64 {
    fn to_value(self) -> Value {
        Value::Integer(self)
    }
}

impl NumericType for f32 {
    fn to_value(self) -> Value {
        Value::Float(self as f64)
    }
}

impl NumericType for f64 {
    fn to_value(self) -> Value {
        Value::Float(self)
    }
}

impl NumericType for Value {
    fn to_value(self) -> Value {
        self
    }
}

/// Column data, one variant per [`ColumnType`].
///
/// Every variant is nullable: missing values live in the Arrow validity
/// bitmap of the wrapped array.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Integer(Int64Array),
    Float(Float64Array),
    String(StringArray),
    Boolean(BooleanArray),
}

impl Column {
    /// Convert an Arrow array into a column.
    ///
    /// Narrower integer and float types are widened to 64 bits, large and
    /// view strings become plain UTF-8 and an all-null array becomes a string
    /// column of nulls.
    pub fn try_from_array(name: &str, array: &ArrayRef) -> Result<Self, TableError> {
        match array.data_type() {
            DataType::Int64 => Ok(Column::Integer(array.as_primitive::<Int64Type>().clone())),
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32 => {
                let casted = compute::cast(array, &DataType::Int64)?;
                Ok(Column::Integer(casted.as_primitive::<Int64Type>().clone()))
            }
            DataType::Float64 => Ok(Column::Float(array.as_primitive::<Float64Type>().clone())),
            DataType::Float16 | DataType::Float32 => {
                let casted = compute::cast(array, &DataType::Float64)?;
                Ok(Column::Float(casted.as_primitive::<Float64Type>().clone()))
            }
            DataType::Utf8 => Ok(Column::String(array.as_string::<i32>().clone())),
            DataType::LargeUtf8 | DataType::Utf8View => {
                let casted = compute::cast(array, &DataType::Utf8)?;
                Ok(Column::String(casted.as_string::<i32>().clone()))
            }
            DataType::Boolean => Ok(Column::Boolean(array.as_boolean().clone())),
            DataType::Null => Ok(Column::String(StringArray::new_null(array.len()))),
            other => Err(TableError::UnsupportedType {
                column: name.to_string(),
                data_type: other.to_string(),
            }),
        }
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Integer(_) => ColumnType::Integer,
            Column::Float(_) => ColumnType::Float,
            Column::String(_) => ColumnType::String,
            Column::Boolean(_) => ColumnType::Boolean,
        }
    }

    pub fn as_array(&self) -> &dyn Array {
        match self {
            Column::Integer(a) => a,
            Column::Float(a) => a,
            Column::String(a) => a,
            Column::Boolean(a) => a,
        }
    }

    pub fn len(&self) -> usize {
        self.as_array().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of missing cells. `NaN` counts as missing in float columns.
    pub fn missing_count(&self) -> usize {
        match self {
            Column::Float(a) => a.null_count() + a.iter().flatten().filter(|v| v.is_nan()).count(),
            other => other.as_array().null_count(),
        }
    }
}

impl From<Int64Array> for Column {
    fn from(array: Int64Array) -> Self {
        Column::Integer(array)
    }
}

impl From<Float64Array> for Column {
    fn from(array: Float64Array) -> Self {
        Column::Float(array)
    }
}

impl From<StringArray> for Column {
    fn from(array: StringArray) -> Self {
        Column::String(array)
    }
}

impl From<BooleanArray> for Column {
    fn from(array: BooleanArray) -> Self {
        Column::Boolean(array)
    }
}

impl From<Vec<i64>> for Column {
    fn from(values: Vec<i64>) -> Self {
        Column::Integer(Int64Array::from(values))
    }
}

impl From<Vec<Option<i64>>> for Column {
    fn from(values: Vec<Option<i64>>) -> Self {
        Column::Integer(Int64Array::from(values))
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Float(Float64Array::from(values))
    }
}

impl From<Vec<Option<f64>>> for Column {
    fn from(values: Vec<Option<f64>>) -> Self {
        Column::Float(Float64Array::from(values))
    }
}

impl From<Vec<&str>> for Column {
    fn from(values: Vec<&str>) -> Self {
        Column::String(StringArray::from(values))
    }
}

impl From<Vec<Option<&str>>> for Column {
    fn from(values: Vec<Option<&str>>) -> Self {
        Column::String(StringArray::from(values))
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Column::String(StringArray::from(values))
    }
}

impl From<Vec<bool>> for Column {
    fn from(values: Vec<bool>) -> Self {
        Column::Boolean(BooleanArray::from(values))
    }
}

impl From<Vec<Option<bool>>> for Column {
    fn from(values: Vec<Option<bool>>) -> Self {
        Column::Boolean(BooleanArray::from(values))
    }
}
