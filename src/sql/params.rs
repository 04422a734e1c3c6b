//! Convert serde_json::Value to types that sqlx can bind against MySQL.

use serde_json::Value;
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::mysql::{MySql, MySqlTypeInfo};
use sqlx::{Database, Type};

/// A value that can be bound to a MySQL statement. Reports its own wire type per value,
/// so a single parameter list can mix strings, numbers, booleans and NULL.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(String),
}

impl BindValue {
    /// Arrays and objects are sent as their JSON text.
    pub fn from_json(v: &Value) -> Self {
        match v {
            Value::Null => BindValue::Null,
            Value::Bool(b) => BindValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    BindValue::I64(i)
                } else if let Some(u) = n.as_u64() {
                    BindValue::U64(u)
                } else {
                    BindValue::F64(n.as_f64().unwrap_or_default())
                }
            }
            Value::String(s) => BindValue::String(s.clone()),
            Value::Array(_) | Value::Object(_) => BindValue::String(v.to_string()),
        }
    }
}

impl<'q> Encode<'q, MySql> for BindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <MySql as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match self {
            BindValue::Null => Ok(IsNull::Yes),
            BindValue::Bool(b) => <bool as Encode<MySql>>::encode_by_ref(b, buf),
            BindValue::I64(n) => <i64 as Encode<MySql>>::encode_by_ref(n, buf),
            BindValue::U64(n) => <u64 as Encode<MySql>>::encode_by_ref(n, buf),
            BindValue::F64(n) => <f64 as Encode<MySql>>::encode_by_ref(n, buf),
            BindValue::String(s) => <&str as Encode<MySql>>::encode_by_ref(&s.as_str(), buf),
        }
    }

    fn produces(&self) -> Option<MySqlTypeInfo> {
        Some(match self {
            BindValue::Null | BindValue::String(_) => <str as Type<MySql>>::type_info(),
            BindValue::Bool(_) => <bool as Type<MySql>>::type_info(),
            BindValue::I64(_) => <i64 as Type<MySql>>::type_info(),
            BindValue::U64(_) => <u64 as Type<MySql>>::type_info(),
            BindValue::F64(_) => <f64 as Type<MySql>>::type_info(),
        })
    }
}

impl Type<MySql> for BindValue {
    fn type_info() -> MySqlTypeInfo {
        <str as Type<MySql>>::type_info()
    }

    fn compatible(_ty: &MySqlTypeInfo) -> bool {
        true
    }
}
