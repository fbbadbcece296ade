use super::{RouteMap, RouteTarget};
use crate::error::RouteError;
use crate::http_helpers::HttpMethod;
use crate::matcher::RoutePattern;
use crate::pipeline::Pipeline;

/// Fluent builder over a [`RouteMap`].
///
/// ```
/// use switchyard::{HttpMethod, Matcher, Router};
/// use switchyard::traits_helpers::Handler;
///
/// let router = Router::with_prefix("/api")
///     .get("/v1", [Handler::from_sync(|_| Ok(()))])
///     .unwrap();
///
/// assert!(router.route_map().has(&Matcher::new("/api/v1", HttpMethod::GET)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Router {
    route_map: RouteMap,
}

macro_rules! verb_helpers {
    ($($name:ident => $method:ident),* $(,)?) => {
        $(
            #[doc = concat!("Register a `", stringify!($method), "` route")]
            pub fn $name(
                self,
                target: impl Into<RouteTarget>,
                pipeline: impl Into<Pipeline>,
            ) -> Result<Self, RouteError> {
                self.register(target, &[HttpMethod::$method], pipeline)
            }
        )*
    };
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// A router whose routes are all registered under `prefix`
    pub fn with_prefix(prefix: impl Into<RoutePattern>) -> Self {
        Self::from_route_map(RouteMap::with_prefix(prefix))
    }

    pub fn from_route_map(route_map: RouteMap) -> Self {
        Self { route_map }
    }

    pub fn route_map(&self) -> &RouteMap {
        &self.route_map
    }

    pub fn into_route_map(self) -> RouteMap {
        self.route_map
    }

    pub fn register(
        mut self,
        target: impl Into<RouteTarget>,
        methods: &[HttpMethod],
        pipeline: impl Into<Pipeline>,
    ) -> Result<Self, RouteError> {
        self.route_map.add(target, methods, pipeline)?;
        Ok(self)
    }

    verb_helpers! {
        get => GET,
        post => POST,
        put => PUT,
        patch => PATCH,
        delete => DELETE,
        options => OPTIONS,
        head => HEAD,
    }

    /// Register the route under every supported method
    pub fn all(
        self,
        target: impl Into<RouteTarget>,
        pipeline: impl Into<Pipeline>,
    ) -> Result<Self, RouteError> {
        self.register(target, &HttpMethod::ALL, pipeline)
    }

    pub fn before_each(mut self, pipeline: impl Into<Pipeline>) -> Self {
        self.route_map.before_each(pipeline);
        self
    }

    pub fn after_each(mut self, pipeline: impl Into<Pipeline>) -> Self {
        self.route_map.after_each(pipeline);
        self
    }

    /// A new router holding the routes of both, `other` winning on overlap
    pub fn concat(&self, other: &Router) -> Result<Router, RouteError> {
        Ok(Self::from_route_map(self.route_map.concat(&other.route_map)?))
    }
}

impl From<RouteMap> for Router {
    fn from(route_map: RouteMap) -> Self {
        Self::from_route_map(route_map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_helpers::HttpRequest;
    use crate::matcher::Matcher;
    use crate::traits_helpers::middleware::Handler;

    fn noop() -> Handler {
        Handler::from_sync(|_| Ok(()))
    }

    fn first_matcher(router: &Router) -> Matcher {
        router.route_map().matchers().next().cloned().unwrap()
    }

    #[test]
    fn test_register() {
        let router = Router::new().register("/", &[HttpMethod::GET], Pipeline::empty()).unwrap();
        assert_eq!(first_matcher(&router), Matcher::new("/", HttpMethod::GET));
    }

    #[test]
    fn test_register_multiple_methods() {
        let router = Router::new()
            .register("/", &[HttpMethod::GET, HttpMethod::POST], Pipeline::empty())
            .unwrap();

        let matchers: Vec<Matcher> = router.route_map().matchers().cloned().collect();
        assert_eq!(
            matchers,
            vec![Matcher::new("/", HttpMethod::GET), Matcher::new("/", HttpMethod::POST)]
        );
    }

    #[test]
    fn test_verb_helpers() {
        let cases: [(fn(Router) -> Result<Router, RouteError>, HttpMethod); 7] = [
            (|r| r.get("/", Pipeline::empty()), HttpMethod::GET),
            (|r| r.post("/", Pipeline::empty()), HttpMethod::POST),
            (|r| r.put("/", Pipeline::empty()), HttpMethod::PUT),
            (|r| r.patch("/", Pipeline::empty()), HttpMethod::PATCH),
            (|r| r.delete("/", Pipeline::empty()), HttpMethod::DELETE),
            (|r| r.options("/", Pipeline::empty()), HttpMethod::OPTIONS),
            (|r| r.head("/", Pipeline::empty()), HttpMethod::HEAD),
        ];

        for (register, method) in cases {
            let router = register(Router::new()).unwrap();
            assert_eq!(router.route_map().len(), 1);
            assert_eq!(first_matcher(&router), Matcher::new("/", method));
        }
    }

    #[test]
    fn test_all_registers_every_method() {
        let router = Router::new().all("/", Pipeline::empty()).unwrap();
        assert_eq!(router.route_map().len(), HttpMethod::ALL.len());
        assert!(router.route_map().has(&Matcher::new("/", HttpMethod::MSEARCH)));
    }

    #[test]
    fn test_with_prefix() {
        let router = Router::with_prefix("/api").get("/v1", Pipeline::empty()).unwrap();
        assert!(router.route_map().has(&Matcher::new("/api/v1", HttpMethod::GET)));
    }

    #[test]
    fn test_concat_merges_route_maps() {
        let left = Router::new().get("/", Pipeline::empty()).unwrap();
        let right = Router::new().get("/1", Pipeline::empty()).unwrap();

        let merged = left.concat(&right).unwrap();

        assert!(merged.route_map().has(&Matcher::new("/", HttpMethod::GET)));
        assert!(merged.route_map().has(&Matcher::new("/1", HttpMethod::GET)));
    }

    #[test]
    fn test_nested_prefixes() {
        let users = Router::with_prefix("/v1").get("/users", Pipeline::empty()).unwrap();
        let api = Router::with_prefix("/api").concat(&users).unwrap();

        assert!(api.route_map().has(&Matcher::new("/api/v1/users", HttpMethod::GET)));
        assert!(api.route_map().find(&HttpRequest::new("GET", "/api/v1/users")).is_match());
    }

    #[test]
    fn test_hooks() {
        let (f1, f2) = (noop(), noop());
        let request = HttpRequest::new("GET", "/");

        let before = Router::new().get("/", [f1.clone()]).unwrap().before_each([f2.clone()]);
        assert_eq!(
            before.route_map().find(&request).pipeline,
            Pipeline::of([f2.clone(), f1.clone()])
        );

        let after = Router::new().get("/", [f1.clone()]).unwrap().after_each([f2.clone()]);
        assert_eq!(after.route_map().find(&request).pipeline, Pipeline::of([f1, f2]));
    }

    #[test]
    fn test_concat_hooks() {
        let (f1, f2, f3) = (noop(), noop(), noop());
        let request = HttpRequest::new("GET", "/");

        let after = Router::new()
            .get("/", [f1.clone()])
            .unwrap()
            .after_each([f2.clone()])
            .concat(&Router::new().after_each([f3.clone()]))
            .unwrap();
        assert_eq!(
            after.route_map().find(&request).pipeline,
            Pipeline::of([f1.clone(), f3.clone(), f2.clone()])
        );

        let before = Router::new()
            .get("/", [f1.clone()])
            .unwrap()
            .before_each([f2.clone()])
            .concat(&Router::new().before_each([f3.clone()]))
            .unwrap();
        assert_eq!(before.route_map().find(&request).pipeline, Pipeline::of([f2, f3, f1]));
    }
}
