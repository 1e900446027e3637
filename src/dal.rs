pub mod accessibility_points;
pub mod bus_routes;
pub mod bus_stops;

pub use accessibility_points::*;
pub use bus_routes::*;
pub use bus_stops::*;
