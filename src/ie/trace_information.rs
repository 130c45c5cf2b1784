//! Trace Information IE.

use crate::ie::{Ie, IeType};
use std::io;

/// Represents the Trace Information Element.
/// Used for network debugging and tracing support in 5G networks.
/// Defined in 3GPP TS 29.244 Section 8.2.102.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceInformation {
    pub mcc_mnc: [u8; 3],  // Mobile Country Code and Mobile Network Code (PLMN ID)
    pub trace_id: [u8; 3], // Trace ID (24 bits)
    pub triggering_events: Vec<u8>, // List of triggering events (variable length)
    pub trace_depth: u8,   // Trace depth
    pub list_of_interfaces: Vec<u8>, // List of interfaces to trace (variable length)
    pub ip_address_of_trace_collection_entity: Option<Vec<u8>>, // IPv4 or IPv6 address
}

impl TraceInformation {
    /// Creates a new Trace Information IE.
    pub fn new(
        mcc_mnc: [u8; 3],
        trace_id: [u8; 3],
        triggering_events: Vec<u8>,
        trace_depth: u8,
        list_of_interfaces: Vec<u8>,
    ) -> Self {
        TraceInformation {
            mcc_mnc,
            trace_id,
            triggering_events,
            trace_depth,
            list_of_interfaces,
            ip_address_of_trace_collection_entity: None,
        }
    }

    /// Adds an IP address of the trace collection entity.
    pub fn with_trace_collection_entity_ip(mut self, ip_address: Vec<u8>) -> Self {
        self.ip_address_of_trace_collection_entity = Some(ip_address);
        self
    }

    /// Sets the trace collection entity IPv4 address.
    pub fn with_trace_collection_entity_ipv4(mut self, ipv4: std::net::Ipv4Addr) -> Self {
        self.ip_address_of_trace_collection_entity = Some(ipv4.octets().to_vec());
        self
    }

    /// Sets the trace collection entity IPv6 address.
    pub fn with_trace_collection_entity_ipv6(mut self, ipv6: std::net::Ipv6Addr) -> Self {
        self.ip_address_of_trace_collection_entity = Some(ipv6.octets().to_vec());
        self
    }

    /// Gets the PLMN ID (MCC + MNC).
    pub fn plmn_id(&self) -> [u8; 3] {
        self.mcc_mnc
    }

    /// Gets the trace ID.
    pub fn trace_id(&self) -> [u8; 3] {
        self.trace_id
    }

    /// Gets the trace collection entity IP address as IPv4 if possible.
    pub fn trace_collection_entity_ipv4(&self) -> Option<std::net::Ipv4Addr> {
        if let Some(ref ip) = self.ip_address_of_trace_collection_entity {
            if ip.len() == 4 {
                return Some(std::net::Ipv4Addr::new(ip[0], ip[1], ip[2], ip[3]));
            }
        }
        None
    }

    /// Gets the trace collection entity IP address as IPv6 if possible.
    pub fn trace_collection_entity_ipv6(&self) -> Option<std::net::Ipv6Addr> {
        if let Some(ref ip) = self.ip_address_of_trace_collection_entity {
            if ip.len() == 16 {
                let mut octets = [0u8; 16];
                octets.copy_from_slice(ip);
                return Some(std::net::Ipv6Addr::from(octets));
            }
        }
        None
    }

    /// Gets the length of the marshaled Trace Information.
    pub fn len(&self) -> usize {
        let mut len = 3 + 3 + 1 + 1; // mcc_mnc + trace_id + triggering_events_len + trace_depth
        len += self.triggering_events.len();
        len += 1; // list_of_interfaces_len
        len += self.list_of_interfaces.len();

        if let Some(ref ip) = self.ip_address_of_trace_collection_entity {
            len += 1 + ip.len(); // ip_address_len + ip_address
        } else {
            len += 1; // ip_address_len = 0
        }

        len
    }

    /// Checks if the Trace Information is empty.
    pub fn is_empty(&self) -> bool {
        false // Trace Information always has mandatory fields
    }

    /// Marshals the Trace Information into a byte vector.
    pub fn marshal(&self) -> Vec<u8> {
        let mut data = Vec::new();

        // PLMN ID (MCC + MNC)
        data.extend_from_slice(&self.mcc_mnc);

        // Trace ID
        data.extend_from_slice(&self.trace_id);

        // Triggering Events length and data
        data.push(self.triggering_events.len() as u8);
        data.extend_from_slice(&self.triggering_events);

        // Trace Depth
        data.push(self.trace_depth);

        // List of Interfaces length and data
        data.push(self.list_of_interfaces.len() as u8);
        data.extend_from_slice(&self.list_of_interfaces);

        // IP Address of Trace Collection Entity length and data
        if let Some(ref ip) = self.ip_address_of_trace_collection_entity {
            data.push(ip.len() as u8);
            data.extend_from_slice(ip);
        } else {
            data.push(0); // No IP address
        }

        data
    }

    /// Unmarshals a byte slice into a Trace Information IE.
    pub fn unmarshal(payload: &[u8]) -> Result<Self, io::Error> {
        if payload.len() < 9 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Trace Information payload too short",
            ));
        }

        let mut offset = 0;

        // PLMN ID (MCC + MNC)
        let mut mcc_mnc = [0u8; 3];
        mcc_mnc.copy_from_slice(&payload[offset..offset + 3]);
        offset += 3;

        // Trace ID
        let mut trace_id = [0u8; 3];
        trace_id.copy_from_slice(&payload[offset..offset + 3]);
        offset += 3;

        // Triggering Events length
        let triggering_events_len = payload[offset] as usize;
        offset += 1;

        if offset + triggering_events_len > payload.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Invalid triggering events length",
            ));
        }

        // Triggering Events data
        let triggering_events = payload[offset..offset + triggering_events_len].to_vec();
        offset += triggering_events_len;

        if offset >= payload.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Missing trace depth",
            ));
        }

        // Trace Depth
        let trace_depth = payload[offset];
        offset += 1;

        if offset >= payload.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Missing list of interfaces length",
            ));
        }

        // List of Interfaces length
        let interfaces_len = payload[offset] as usize;
        offset += 1;

        if offset + interfaces_len > payload.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Invalid list of interfaces length",
            ));
        }

        // List of Interfaces data
        let list_of_interfaces = payload[offset..offset + interfaces_len].to_vec();
        offset += interfaces_len;

        if offset >= payload.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Missing IP address length",
            ));
        }

        // IP Address of Trace Collection Entity length
        let ip_len = payload[offset] as usize;
        offset += 1;

        let ip_address_of_trace_collection_entity = if ip_len > 0 {
            if offset + ip_len > payload.len() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "Invalid IP address length",
                ));
            }
            Some(payload[offset..offset + ip_len].to_vec())
        } else {
            None
        };

        Ok(TraceInformation {
            mcc_mnc,
            trace_id,
            triggering_events,
            trace_depth,
            list_of_interfaces,
            ip_address_of_trace_collection_entity,
        })
    }

    /// Wraps the Trace Information in a Trace Information IE.
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::TraceInformation, self.marshal())
    }
}
