/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp and
/// the state of the document store connection.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00",
///   "database": "established"
/// }
/// ```
pub mod health;

/// Persisted status records and the public message wire types.
pub mod message;
