/// Ordered query parameters. Absent values are dropped on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(Vec<(&'static str, String)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name=value`.
    pub fn push(mut self, name: &'static str, value: impl QueryValue) -> Self {
        self.0.push((name, value.to_query_value()));
        self
    }

    /// Append `name=value` when `value` is present.
    pub fn push_opt<V: QueryValue>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(name, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

/// Wire rendering of a single query value.
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

impl QueryValue for bool {
    fn to_query_value(&self) -> String {
        if *self { "true" } else { "false" }.to_owned()
    }
}

macro_rules! decimal_query_value {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

decimal_query_value!(u8, u16, u32, u64, i32, i64, usize);

impl QueryValue for &str {
    fn to_query_value(&self) -> String {
        (*self).to_owned()
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl<T: AsRef<str>> QueryValue for &[T] {
    fn to_query_value(&self) -> String {
        self.iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans_are_lowercase() {
        let query = Query::new()
            .push("ignore_attachments", true)
            .push("ignore_stories", false);
        assert_eq!(query.get("ignore_attachments"), Some("true"));
        assert_eq!(query.get("ignore_stories"), Some("false"));
    }

    #[test]
    fn integers_are_decimal() {
        let query = Query::new().push("timeout", 5_u32).push("max_messages", 120_u64);
        assert_eq!(query.get("timeout"), Some("5"));
        assert_eq!(query.get("max_messages"), Some("120"));
    }

    #[test]
    fn lists_are_comma_joined() {
        let numbers = vec!["+1".to_owned(), "+2".to_owned(), "+3".to_owned()];
        let query = Query::new().push("numbers", numbers.as_slice());
        assert_eq!(query.get("numbers"), Some("+1,+2,+3"));
    }

    #[test]
    fn absent_values_are_omitted() {
        let query = Query::new()
            .push_opt("timeout", Some(10_u32))
            .push_opt::<bool>("ignore_attachments", None)
            .push_opt::<u32>("max_messages", None);

        assert_eq!(query.iter().collect::<Vec<_>>(), vec![("timeout", "10")]);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let query = Query::new()
            .push("device_name", "laptop")
            .push("qrcode_version", 10_u32);
        assert_eq!(
            query.iter().collect::<Vec<_>>(),
            vec![("device_name", "laptop"), ("qrcode_version", "10")]
        );
    }
}
