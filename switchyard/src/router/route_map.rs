use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::RouteError;
use crate::http_helpers::{HttpMethod, HttpRequest};
use crate::matcher::{Matcher, RoutePattern};
use crate::pipeline::Pipeline;

/// What a route is registered under.
///
/// A pattern is expanded into one matcher per method. A ready-made matcher
/// already carries its method and is registered once.
#[derive(Debug, Clone)]
pub enum RouteTarget {
    Pattern(RoutePattern),
    Matcher(Matcher),
}

impl From<RoutePattern> for RouteTarget {
    fn from(pattern: RoutePattern) -> Self {
        RouteTarget::Pattern(pattern)
    }
}

impl From<&str> for RouteTarget {
    fn from(path: &str) -> Self {
        RouteTarget::Pattern(path.into())
    }
}

impl From<String> for RouteTarget {
    fn from(path: String) -> Self {
        RouteTarget::Pattern(path.into())
    }
}

impl From<Regex> for RouteTarget {
    fn from(regex: Regex) -> Self {
        RouteTarget::Pattern(regex.into())
    }
}

impl From<Matcher> for RouteTarget {
    fn from(matcher: Matcher) -> Self {
        RouteTarget::Matcher(matcher)
    }
}

/// Result of [`RouteMap::find`].
///
/// On a hit `key` is the matched route and `pipeline` is the full chain
/// (before-each hooks, the route's own handlers, after-each hooks). On a
/// miss `key` is `None` and the pipeline is empty.
#[derive(Debug, Clone)]
pub struct RouteLookup {
    pub key: Option<Matcher>,
    pub pipeline: Pipeline,
}

impl RouteLookup {
    fn miss() -> Self {
        Self {
            key: None,
            pipeline: Pipeline::empty(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.key.is_some()
    }
}

/// Matcher to pipeline associations for one router scope.
///
/// Entries keep insertion order until the map is sorted. Sorting happens
/// at most once, on the first lookup or an explicit [`RouteMap::sort`],
/// and puts exact matchers before regex matchers, each group by ascending
/// specificity. Adding a route invalidates the sort.
#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    routes: Vec<(Matcher, Pipeline)>,
    prefix: RoutePattern,
    before_each: Pipeline,
    after_each: Pipeline,
    order: OnceLock<Vec<usize>>,
}

impl RouteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map whose routes are all registered under `prefix`
    pub fn with_prefix(prefix: impl Into<RoutePattern>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// A map holding `routes` exactly as given, without prefixing them.
    /// Later entries replace earlier ones with an equal matcher.
    pub fn of(routes: impl IntoIterator<Item = (Matcher, Pipeline)>) -> Self {
        let mut map = Self::new();
        for (matcher, pipeline) in routes {
            map.upsert(matcher, pipeline);
        }
        map
    }

    pub fn prefix(&self) -> &RoutePattern {
        &self.prefix
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn before_each_pipeline(&self) -> &Pipeline {
        &self.before_each
    }

    pub fn after_each_pipeline(&self) -> &Pipeline {
        &self.after_each
    }

    /// Register `pipeline` for `target` under each of `methods`.
    ///
    /// The map's prefix is merged into every matcher. Registering an
    /// existing (pattern, method) pair replaces its pipeline in place.
    pub fn add(
        &mut self,
        target: impl Into<RouteTarget>,
        methods: &[HttpMethod],
        pipeline: impl Into<Pipeline>,
    ) -> Result<&mut Self, RouteError> {
        let pipeline = pipeline.into();

        match target.into() {
            RouteTarget::Matcher(matcher) => {
                let matcher = matcher.with_prefix(&self.prefix)?;
                self.insert(matcher, pipeline.clone());
            }
            RouteTarget::Pattern(pattern) => {
                for &method in methods {
                    let matcher = Matcher::new(pattern.clone(), method).with_prefix(&self.prefix)?;
                    self.insert(matcher, pipeline.clone());
                }
            }
        }

        Ok(self)
    }

    fn insert(&mut self, matcher: Matcher, pipeline: Pipeline) {
        debug!(route = %matcher, handlers = pipeline.len(), "registering route");
        self.upsert(matcher, pipeline);
    }

    fn upsert(&mut self, matcher: Matcher, pipeline: Pipeline) {
        match self.routes.iter_mut().find(|(existing, _)| *existing == matcher) {
            Some((_, stored)) => *stored = pipeline,
            None => {
                self.routes.push((matcher, pipeline));
                self.order.take();
            }
        }
    }

    /// Structural lookup: any matcher with the same pattern and method counts
    pub fn has(&self, matcher: &Matcher) -> bool {
        self.routes.iter().any(|(existing, _)| existing == matcher)
    }

    /// The pipeline stored for `matcher`, without hooks
    pub fn get(&self, matcher: &Matcher) -> Option<&Pipeline> {
        self.routes
            .iter()
            .find(|(existing, _)| existing == matcher)
            .map(|(_, pipeline)| pipeline)
    }

    /// Handlers run before every route. Repeated calls append.
    pub fn before_each(&mut self, pipeline: impl Into<Pipeline>) -> &mut Self {
        self.before_each = self.before_each.concat(&pipeline.into());
        self
    }

    /// Handlers run after every route. Repeated calls append.
    pub fn after_each(&mut self, pipeline: impl Into<Pipeline>) -> &mut Self {
        self.after_each = self.after_each.concat(&pipeline.into());
        self
    }

    /// First route, in sorted order, whose matcher accepts `request`.
    pub fn find(&self, request: &HttpRequest) -> RouteLookup {
        let order = self.order();

        let found = order
            .iter()
            .map(|&index| &self.routes[index])
            .find(|(matcher, _)| matcher.matches(request));

        match found {
            Some((matcher, pipeline)) => {
                trace!(route = %matcher, method = %request.method, uri = %request.uri, "route matched");
                RouteLookup {
                    key: Some(matcher.clone()),
                    pipeline: self.before_each.concat(pipeline).concat(&self.after_each),
                }
            }
            None => {
                trace!(method = %request.method, uri = %request.uri, "no route matched");
                RouteLookup::miss()
            }
        }
    }

    /// Merge `other` into a new map. Neither operand changes.
    ///
    /// Every incoming matcher gets this map's prefix merged in first. Where
    /// an incoming matcher equals one of ours, the incoming pipeline wins.
    /// Before-each hooks run ours first, after-each hooks run ours last.
    pub fn concat(&self, other: &RouteMap) -> Result<RouteMap, RouteError> {
        let incoming = other
            .routes
            .iter()
            .map(|(matcher, pipeline)| Ok((matcher.with_prefix(&self.prefix)?, pipeline.clone())))
            .collect::<Result<Vec<_>, RouteError>>()?;

        let mut routes: Vec<(Matcher, Pipeline)> = self
            .routes
            .iter()
            .filter(|(matcher, _)| !incoming.iter().any(|(key, _)| key == matcher))
            .cloned()
            .collect();
        routes.extend(incoming);

        debug!(routes = routes.len(), "route maps merged");

        let mut merged = RouteMap::of(routes);
        merged.prefix = self.prefix.clone();
        merged.before_each = self.before_each.concat(&other.before_each);
        merged.after_each = other.after_each.concat(&self.after_each);
        Ok(merged)
    }

    /// Order the routes for lookup. Runs once; later calls are no-ops.
    pub fn sort(&self) {
        self.order();
    }

    pub fn is_sorted(&self) -> bool {
        self.order.get().is_some()
    }

    /// Routes in lookup order once sorted, in insertion order before
    pub fn iter(&self) -> impl Iterator<Item = (&Matcher, &Pipeline)> + '_ {
        let order = self.order.get();
        (0..self.routes.len()).map(move |position| {
            let index = order.map_or(position, |order| order[position]);
            let (matcher, pipeline) = &self.routes[index];
            (matcher, pipeline)
        })
    }

    pub fn matchers(&self) -> impl Iterator<Item = &Matcher> + '_ {
        self.iter().map(|(matcher, _)| matcher)
    }

    fn order(&self) -> &[usize] {
        self.order.get_or_init(|| {
            let mut order: Vec<usize> = (0..self.routes.len()).collect();
            order.sort_by_key(|&index| {
                let matcher = &self.routes[index].0;
                (!matcher.is_exact(), matcher.specificity())
            });
            debug!(routes = order.len(), "route map sorted");
            order
        })
    }
}
