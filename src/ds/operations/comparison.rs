use crate::ds::value::{NumberType, Value};

fn is_same_number(a: &NumberType, b: &NumberType) -> bool {
    match (a, b) {
        (NumberType::Integer(x), NumberType::Integer(y)) => x == y,
        _ => {
            let (x, y) = (a.as_f64(), b.as_f64());
            if x.is_nan() {
                y.is_nan()
            } else {
                x == y
            }
        }
    }
}

/// The equality used for `contains` checks and for de-duplicating extended
/// sequences. Scalars compare by value (NaN equals NaN, an integer equals a
/// float of the same magnitude), sequences element-wise, and nodes by
/// identity.
pub fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => is_same_number(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Sequence(x), Value::Sequence(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(i, j)| same_value(i, j))
        }
        (Value::Node(x), Value::Node(y)) => x.ptr_eq(y),
        _ => false,
    }
}

/// Appends every element of `additions` that `base` does not already hold.
pub fn union_into(base: &mut Vec<Value>, additions: Vec<Value>) {
    for item in additions {
        if !base.iter().any(|existing| same_value(existing, &item)) {
            base.push(item);
        }
    }
}
