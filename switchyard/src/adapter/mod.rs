mod route_adapter;
pub use route_adapter::RouteAdapter;
