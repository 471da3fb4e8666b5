//! One-line packet summaries for the scrollback pane.

use chrono::Local;
use etherparse::{LinkSlice, NetSlice, SlicedPacket, TransportSlice};
use std::net::{IpAddr, SocketAddr};

use crate::models::{CapturedPacket, LinkKind, PacketRecord};

/// Bytes of the BSD loopback header preceding the IP packet.
const NULL_HEADER_LEN: usize = 4;

/// Format a captured packet as a display line: local time, then a summary of
/// the network and transport headers.
pub fn summarize(packet: &CapturedPacket) -> PacketRecord {
    let time = packet.timestamp.with_timezone(&Local).format("%H:%M:%S%.6f");
    PacketRecord::new(format!(
        "{} {}",
        time,
        describe(packet.link, &packet.data, packet.wire_len)
    ))
}

/// Summary without the timestamp.
pub fn describe(link: LinkKind, data: &[u8], wire_len: u32) -> String {
    let sliced = match link {
        LinkKind::Ethernet => SlicedPacket::from_ethernet(data).ok(),
        LinkKind::LinuxSll => SlicedPacket::from_linux_sll(data).ok(),
        LinkKind::RawIp => SlicedPacket::from_ip(data).ok(),
        LinkKind::Null => data
            .get(NULL_HEADER_LEN..)
            .and_then(|ip| SlicedPacket::from_ip(ip).ok()),
        LinkKind::Other(_) => None,
    };

    match sliced {
        Some(sliced) => describe_sliced(&sliced, wire_len),
        None => format!("len {} (undecoded)", wire_len),
    }
}

fn describe_sliced(sliced: &SlicedPacket<'_>, wire_len: u32) -> String {
    let (family, src, dst) = match &sliced.net {
        Some(NetSlice::Ipv4(ipv4)) => (
            "IPv4",
            IpAddr::V4(ipv4.header().source_addr()),
            IpAddr::V4(ipv4.header().destination_addr()),
        ),
        Some(NetSlice::Ipv6(ipv6)) => (
            "IPv6",
            IpAddr::V6(ipv6.header().source_addr()),
            IpAddr::V6(ipv6.header().destination_addr()),
        ),
        _ => return describe_link_only(sliced, wire_len),
    };

    match &sliced.transport {
        Some(TransportSlice::Tcp(tcp)) => format!(
            "TCP {} > {} [{}] len {}",
            SocketAddr::new(src, tcp.source_port()),
            SocketAddr::new(dst, tcp.destination_port()),
            tcp_flags(tcp.syn(), tcp.ack(), tcp.fin(), tcp.rst(), tcp.psh()),
            wire_len
        ),
        Some(TransportSlice::Udp(udp)) => format!(
            "UDP {} > {} len {}",
            SocketAddr::new(src, udp.source_port()),
            SocketAddr::new(dst, udp.destination_port()),
            wire_len
        ),
        Some(TransportSlice::Icmpv4(icmp)) => format!(
            "ICMP {} > {} type {} code {} len {}",
            src,
            dst,
            icmp.type_u8(),
            icmp.code_u8(),
            wire_len
        ),
        Some(TransportSlice::Icmpv6(icmp)) => format!(
            "ICMPv6 {} > {} type {} code {} len {}",
            src,
            dst,
            icmp.type_u8(),
            icmp.code_u8(),
            wire_len
        ),
        _ => format!("{} {} > {} len {}", family, src, dst, wire_len),
    }
}

fn describe_link_only(sliced: &SlicedPacket<'_>, wire_len: u32) -> String {
    match &sliced.link {
        Some(LinkSlice::Ethernet2(eth)) => {
            format!("ether 0x{:04x} len {}", eth.ether_type().0, wire_len)
        }
        _ => format!("len {}", wire_len),
    }
}

fn tcp_flags(syn: bool, ack: bool, fin: bool, rst: bool, psh: bool) -> String {
    let flags: String = [(syn, 'S'), (ack, '.'), (fin, 'F'), (rst, 'R'), (psh, 'P')]
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, c)| *c)
        .collect();
    if flags.is_empty() {
        "none".to_string()
    } else {
        flags
    }
}
