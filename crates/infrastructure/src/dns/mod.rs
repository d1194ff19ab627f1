pub mod client;
pub mod message_builder;
pub mod record_kind_map;
pub mod response_parser;
pub mod system_conf;

pub use client::UdpZoneResolver;
pub use message_builder::MessageBuilder;
pub use record_kind_map::RecordKindMapper;
pub use response_parser::ResponseParser;
pub use system_conf::read_system_conf;
