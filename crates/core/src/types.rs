/// All entity ids are server-assigned UUIDv4 strings. The store treats
/// them as opaque; nothing downstream parses them back into a `Uuid`.
pub type EntityId = String;
