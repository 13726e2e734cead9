use super::{checksum, is_valid, Identifier, SequenceNumber};
use pnet_packet::icmp::{
    echo_reply::EchoReplyPacket,
    echo_request::{
        EchoRequestPacket as EchoRequestPacketV4, IcmpCodes, MutableEchoRequestPacket as MutableEchoRequestPacketV4,
    },
    IcmpPacket, IcmpTypes,
};
use pnet_packet::Packet;

/// Inbound datagrams are assumed to carry an IPv4 header without options.
pub(crate) const IPV4_HEADER_LEN: usize = 20;
pub(crate) const ECHO_HEADER_LEN: usize = 8;

pub(crate) type EchoHeader = [u8; ECHO_HEADER_LEN];

/// What an inbound datagram means for the request in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Inbound {
    Verified,
    Corrupt,
    Error { icmp_type: u8, code: u8 },
    Unrelated,
}

pub(crate) struct IcmpV4 {
    identifier: Identifier,
    payload: Vec<u8>,
}

impl IcmpV4 {
    pub(crate) fn new(identifier: Identifier, payload_size: usize) -> IcmpV4 {
        IcmpV4 { identifier, payload: ascending_payload(payload_size) }
    }

    pub(crate) fn new_echo_request(&self, sequence_number: SequenceNumber) -> Option<Vec<u8>> {
        let buf = vec![0u8; EchoRequestPacketV4::minimum_packet_size() + self.payload.len()];
        let mut package = MutableEchoRequestPacketV4::owned(buf)?;
        package.set_icmp_type(IcmpTypes::EchoRequest);
        package.set_icmp_code(IcmpCodes::NoCode);
        package.set_identifier(self.identifier.into());
        package.set_sequence_number(sequence_number.into());
        package.set_payload(&self.payload);

        package.set_checksum(0_u16);
        let checksum = checksum(package.packet());
        package.set_checksum(checksum);
        Some(package.packet().to_vec())
    }

    /// Classifies `datagram` against the request carrying `sequence_number` and `sent_header`.
    ///
    /// An error message counts only if it ends with the 8-byte header of the
    /// request. Errors quoting more of the offending datagram (errors raised
    /// by the local host on Linux, RFC 1812 routers) are unrelated traffic
    /// unless the payload is empty, and the ping then times out.
    pub(crate) fn classify(
        &self,
        datagram: &[u8],
        sequence_number: SequenceNumber,
        sent_header: &EchoHeader,
    ) -> Inbound {
        if datagram.len() < IPV4_HEADER_LEN + ECHO_HEADER_LEN {
            return Inbound::Unrelated;
        }
        let message = &datagram[IPV4_HEADER_LEN..];
        let Some(icmp_package) = IcmpPacket::new(message) else {
            return Inbound::Unrelated;
        };

        let icmp_type = icmp_package.get_icmp_type();
        if icmp_type == IcmpTypes::EchoReply {
            let Some(echo_reply) = EchoReplyPacket::new(message) else {
                return Inbound::Unrelated;
            };
            if echo_reply.get_identifier() != u16::from(self.identifier)
                || echo_reply.get_sequence_number() != u16::from(sequence_number)
            {
                return Inbound::Unrelated;
            }
            if !is_valid(message) {
                tracing::warn!("echo reply {} has a bad checksum", sequence_number);
            }
            if echo_reply.payload() == self.payload.as_slice() {
                Inbound::Verified
            } else {
                Inbound::Corrupt
            }
        } else if icmp_type == IcmpTypes::EchoRequest {
            // Raw sockets also see outbound requests on loopback.
            Inbound::Unrelated
        } else if datagram.ends_with(sent_header) {
            Inbound::Error { icmp_type: icmp_type.0, code: icmp_package.get_icmp_code().0 }
        } else {
            Inbound::Unrelated
        }
    }
}

/// `0, 1, ..., 255, 0, 1, ...` up to `size` bytes.
pub(crate) fn ascending_payload(size: usize) -> Vec<u8> {
    (0..=u8::MAX).cycle().take(size).collect()
}

/// The first [`ECHO_HEADER_LEN`] bytes of an encoded request.
pub(crate) fn echo_header(package: &[u8]) -> Option<EchoHeader> {
    package.get(..ECHO_HEADER_LEN)?.try_into().ok()
}
