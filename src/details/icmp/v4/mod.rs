mod icmpv4;
pub(crate) use icmpv4::{echo_header, EchoHeader, IcmpV4, Inbound, ECHO_HEADER_LEN, IPV4_HEADER_LEN};

mod identifier;
pub use identifier::Identifier;

mod internet_checksum;
pub use internet_checksum::checksum;
pub(crate) use internet_checksum::is_valid;

mod sequence_number;
pub use sequence_number::{SequenceAllocator, SequenceNumber};

mod socket;
pub(crate) use socket::raw_socket::RawSocket;
pub(crate) use socket::TSocket;

#[cfg(test)]
pub(crate) use socket::tests;
