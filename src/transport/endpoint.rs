use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;

use super::query::Query;
use super::shape::ResponseShape;

/// HTTP methods used by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body accepted by an [`Endpoint`].
pub trait BodyKind {
    /// Whether requests for this endpoint carry a JSON body.
    const HAS_BODY: bool;
}

/// The endpoint takes no request body.
#[derive(Debug, Clone, Copy)]
pub struct NoBody;

impl BodyKind for NoBody {
    const HAS_BODY: bool = false;
}

/// The endpoint takes `T` serialized as JSON.
pub struct JsonBody<T>(PhantomData<fn(&T)>);

impl<T> BodyKind for JsonBody<T> {
    const HAS_BODY: bool = true;
}

/// Static wire description of one operation.
///
/// The response shape `S` and the body kind `B` are part of the type, so an
/// operation can only decode into the output its descriptor declares, and a
/// body can only be attached where the descriptor accepts one.
pub struct Endpoint<S, B = NoBody> {
    method: Method,
    template: &'static str,
    query: &'static [&'static str],
    _shape: PhantomData<fn() -> (S, B)>,
}

impl<S, B> Endpoint<S, B> {
    pub const fn new(method: Method, template: &'static str) -> Self {
        Self {
            method,
            template,
            query: &[],
            _shape: PhantomData,
        }
    }

    pub const fn get(template: &'static str) -> Self {
        Self::new(Method::Get, template)
    }

    pub const fn post(template: &'static str) -> Self {
        Self::new(Method::Post, template)
    }

    pub const fn put(template: &'static str) -> Self {
        Self::new(Method::Put, template)
    }

    pub const fn delete(template: &'static str) -> Self {
        Self::new(Method::Delete, template)
    }

    /// Declare the query parameters this endpoint accepts.
    pub const fn with_query(mut self, names: &'static [&'static str]) -> Self {
        self.query = names;
        self
    }

    #[cfg(test)]
    pub fn method(&self) -> Method {
        self.method
    }

    #[cfg(test)]
    pub fn template(&self) -> &'static str {
        self.template
    }

    #[cfg(test)]
    pub fn query_names(&self) -> &'static [&'static str] {
        self.query
    }

    /// Number of `{placeholder}` segments in the template.
    #[cfg(test)]
    pub fn arity(&self) -> usize {
        self.template.matches('{').count()
    }
}

impl<S, B: BodyKind> Endpoint<S, B> {
    #[cfg(test)]
    pub fn has_body(&self) -> bool {
        B::HAS_BODY
    }

    fn start(&self, args: &[&str], body: Option<String>) -> Request<S> {
        debug_assert_eq!(body.is_some(), B::HAS_BODY);
        Request {
            method: self.method,
            path: resolve_path(self.template, args),
            declared: self.query,
            query: Query::new(),
            body,
            _shape: PhantomData,
        }
    }
}

impl<S: ResponseShape> Endpoint<S, NoBody> {
    /// Start a bodyless request, substituting `args` into the path template in order.
    pub fn request(&self, args: &[&str]) -> Request<S> {
        self.start(args, None)
    }
}

impl<S: ResponseShape, T: Serialize> Endpoint<S, JsonBody<T>> {
    /// Start a request carrying `body` as JSON.
    pub fn request_json(&self, args: &[&str], body: &T) -> Result<Request<S>, serde_json::Error> {
        let body = serde_json::to_string(body)?;
        Ok(self.start(args, Some(body)))
    }
}

/// One outbound exchange, ready for the dispatch engine.
pub struct Request<S> {
    method: Method,
    path: String,
    declared: &'static [&'static str],
    query: Query,
    body: Option<String>,
    _shape: PhantomData<fn() -> S>,
}

impl<S> Request<S> {
    /// Attach query parameters. Every name must be declared on the endpoint.
    pub fn query(mut self, query: Query) -> Self {
        debug_assert!(
            query.iter().all(|(name, _)| self.declared.contains(&name)),
            "undeclared query parameter for {}",
            self.path
        );
        self.query = query;
        self
    }

    #[cfg(test)]
    pub fn method(&self) -> Method {
        self.method
    }

    #[cfg(test)]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[cfg(test)]
    pub fn query_pairs(&self) -> &Query {
        &self.query
    }

    #[cfg(test)]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn into_parts(self) -> (Method, String, Query, Option<String>) {
        (self.method, self.path, self.query, self.body)
    }
}

/// Replace each `{name}` in `template` with the next value from `args`.
///
/// Values are inserted literally. A placeholder without a matching argument
/// is left untouched.
pub fn resolve_path(template: &str, args: &[&str]) -> String {
    let extra = args.iter().map(|value| value.len()).sum::<usize>();
    let mut resolved = String::with_capacity(template.len() + extra);
    let mut args = args.iter();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|idx| open + idx) else {
            break;
        };
        resolved.push_str(&rest[..open]);
        match args.next() {
            Some(value) => resolved.push_str(value),
            None => resolved.push_str(&rest[open..=close]),
        }
        rest = &rest[close + 1..];
    }
    resolved.push_str(rest);
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::shape::{NoContent, RawText};

    #[test]
    fn resolve_path_substitutes_in_order() {
        assert_eq!(
            resolve_path("/v1/identities/{number}/trust/{numbertotrust}", &["+111", "+222"]),
            "/v1/identities/+111/trust/+222"
        );
    }

    #[test]
    fn resolve_path_keeps_values_literal() {
        assert_eq!(
            resolve_path("/v1/groups/{number}/{groupid}", &["+1", "group.abc=="]),
            "/v1/groups/+1/group.abc=="
        );
    }

    #[test]
    fn resolve_path_does_not_rescan_substituted_values() {
        assert_eq!(
            resolve_path("/v1/contacts/{number}/{uuid}", &["{uuid}", "u-1"]),
            "/v1/contacts/{uuid}/u-1"
        );
    }

    #[test]
    fn resolve_path_leaves_unmatched_placeholders() {
        assert_eq!(
            resolve_path("/v1/groups/{number}/{groupid}", &["+1"]),
            "/v1/groups/+1/{groupid}"
        );
    }

    #[test]
    fn resolve_path_without_placeholders_is_identity() {
        assert_eq!(resolve_path("/v1/about", &[]), "/v1/about");
    }

    #[derive(Serialize)]
    struct Pin {
        pin: &'static str,
    }

    #[test]
    fn json_endpoint_serializes_body() {
        const ENDPOINT: Endpoint<NoContent, JsonBody<Pin>> =
            Endpoint::post("/v1/accounts/{number}/pin");

        let request = ENDPOINT.request_json(&["+100"], &Pin { pin: "1234" }).unwrap();

        assert!(ENDPOINT.has_body());
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.path(), "/v1/accounts/+100/pin");
        assert_eq!(request.body(), Some(r#"{"pin":"1234"}"#));
    }

    #[test]
    fn bodyless_endpoint_sends_no_body() {
        const ENDPOINT: Endpoint<RawText> = Endpoint::get("/v1/attachments/{attachment}");

        let request = ENDPOINT.request(&["a.png"]);
        assert!(!ENDPOINT.has_body());
        assert_eq!(request.body(), None);
        assert!(request.query_pairs().is_empty());
        assert_eq!(ENDPOINT.arity(), 1);
    }

    #[test]
    fn declared_query_parameters_are_accepted() {
        const ENDPOINT: Endpoint<RawText> =
            Endpoint::get("/v1/qrcodelink").with_query(&["device_name", "qrcode_version"]);

        let request = ENDPOINT
            .request(&[])
            .query(Query::new().push("device_name", "laptop"));
        assert_eq!(ENDPOINT.query_names(), ["device_name", "qrcode_version"]);
        assert!(!request.query_pairs().is_empty());
    }

    #[test]
    #[should_panic(expected = "undeclared query parameter")]
    fn undeclared_query_parameter_is_rejected() {
        const ENDPOINT: Endpoint<NoContent> = Endpoint::get("/v1/health");

        let _ = ENDPOINT.request(&[]).query(Query::new().push("verbose", true));
    }
}
