use std::fmt;
use std::fmt::{Display, Formatter};

use crate::ds::node::Node;
use crate::ds::operations::comparison::same_value;

/// A value stored against a key. Sequences are the only values an `Extend`
/// entry can merge; node references let a property point at another node.
#[derive(Clone)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(NumberType),
    String(String),
    Sequence(Vec<Value>),
    /// A strong handle. A node that stores itself, or two nodes that store
    /// each other, form a reference cycle that is only freed once one of the
    /// entries is overwritten, deleted or cleared.
    Node(Node),
}

impl Value {
    /// Builds a sequence from anything convertible into values.
    pub fn sequence<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(n) => Some(n),
            _ => None,
        }
    }

    /// Flattens into sequence elements. A scalar becomes a single element so
    /// that extending a scalar ancestor value still yields a sequence.
    pub fn into_elements(self) -> Vec<Value> {
        match self {
            Value::Sequence(items) => items,
            other => vec![other],
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Sequence(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            Value::Node(n) => write!(f, "{}", n),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Value::Null"),
            Value::Boolean(b) => write!(f, "Value::Boolean({})", b),
            Value::Number(n) => write!(f, "Value::Number({:?})", n),
            Value::String(s) => write!(f, "Value::String({:?})", s),
            Value::Sequence(items) => write!(f, "Value::Sequence({:?})", items),
            Value::Node(n) => write!(f, "Value::Node({})", n),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        same_value(self, other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberType {
    Integer(i64),
    Float(f64),
}

impl NumberType {
    pub fn as_f64(&self) -> f64 {
        match self {
            NumberType::Integer(i) => *i as f64,
            NumberType::Float(f) => *f,
        }
    }
}

impl Display for NumberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NumberType::Integer(i) => write!(f, "{}", i),
            NumberType::Float(nf) => write!(f, "{}", nf),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(NumberType::Integer(i as i64))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(NumberType::Integer(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(NumberType::Float(f))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Node> for Value {
    fn from(n: Node) -> Self {
        Value::Node(n)
    }
}

impl From<&Node> for Value {
    fn from(n: &Node) -> Self {
        Value::Node(n.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_builder_converts_items() {
        let v = Value::sequence(vec!["a", "b"]);
        assert_eq!(v.as_sequence().map(|s| s.len()), Some(2));
        assert_eq!(v, Value::Sequence(vec![Value::from("a"), Value::from("b")]));
    }

    #[test]
    fn test_scalar_into_elements() {
        assert_eq!(Value::from(7).into_elements(), vec![Value::from(7)]);
        assert_eq!(Value::sequence(vec![1, 2]).into_elements().len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::sequence(vec!["hello", "there"]).to_string(), "[hello, there]");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::Null.to_string(), "null");
    }
}
