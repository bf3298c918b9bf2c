use crate::sink::Sink;

/// Declarative field registration for user-defined record types.
///
/// A record declares, once, the ordered list of its own members to be bound
/// during parsing; [`Sink::record`] then treats the whole record as a single
/// compound destination consuming exactly that many sequential tokens. The
/// type needs no other involvement with the parse engine.
///
/// ```
/// use parse_framework::{parse, ParseRecord, Sink};
///
/// #[derive(Default)]
/// struct Endpoint {
///     host: String,
///     port: u16,
/// }
///
/// impl ParseRecord for Endpoint {
///     fn parse_fields(&mut self) -> Vec<Sink<'_>> {
///         vec![Sink::scalar(&mut self.host), Sink::scalar(&mut self.port)]
///     }
/// }
///
/// let mut ep = Endpoint::default();
/// parse("example.org:8080", ":", &mut [Sink::record(&mut ep)]).unwrap();
/// assert_eq!(ep.host, "example.org");
/// assert_eq!(ep.port, 8080);
/// ```
pub trait ParseRecord {
    /// Returns the record's members as an ordered destination list.
    fn parse_fields(&mut self) -> Vec<Sink<'_>>;
}
