//! Update Forwarding Parameters IE and its sub-IEs.

use crate::ie::{
    create_traffic_endpoint::TrafficEndpointId, destination_interface::DestinationInterface,
    header_enrichment::HeaderEnrichment, marshal_ies, network_instance::NetworkInstance,
    outer_header_creation::OuterHeaderCreation, proxying::Proxying,
    three_gpp_interface_type::ThreeGppInterfaceTypeIe,
    transport_level_marking::TransportLevelMarking, Ie, IeIterator, IeType,
};
use std::io;

/// Represents the Update Forwarding Parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateForwardingParameters {
    pub destination_interface: Option<DestinationInterface>,
    pub network_instance: Option<NetworkInstance>,
    pub transport_level_marking: Option<TransportLevelMarking>,
    pub outer_header_creation: Option<OuterHeaderCreation>,
    pub traffic_endpoint_id: Option<TrafficEndpointId>,
    pub proxying: Option<Proxying>,
    pub three_gpp_interface_type: Option<ThreeGppInterfaceTypeIe>,
    pub header_enrichment: Option<HeaderEnrichment>,
}

impl UpdateForwardingParameters {
    /// Creates a new Update Forwarding Parameters IE.
    pub fn new() -> Self {
        UpdateForwardingParameters {
            destination_interface: None,
            network_instance: None,
            transport_level_marking: None,
            outer_header_creation: None,
            traffic_endpoint_id: None,
            proxying: None,
            three_gpp_interface_type: None,
            header_enrichment: None,
        }
    }

    /// Adds a Destination Interface to the Update Forwarding Parameters.
    pub fn with_destination_interface(
        mut self,
        destination_interface: DestinationInterface,
    ) -> Self {
        self.destination_interface = Some(destination_interface);
        self
    }

    /// Adds a Network Instance to the Update Forwarding Parameters.
    pub fn with_network_instance(mut self, network_instance: NetworkInstance) -> Self {
        self.network_instance = Some(network_instance);
        self
    }

    /// Adds a Transport Level Marking to the Update Forwarding Parameters.
    pub fn with_transport_level_marking(
        mut self,
        transport_level_marking: TransportLevelMarking,
    ) -> Self {
        self.transport_level_marking = Some(transport_level_marking);
        self
    }

    /// Adds Outer Header Creation to the Update Forwarding Parameters.
    pub fn with_outer_header_creation(
        mut self,
        outer_header_creation: OuterHeaderCreation,
    ) -> Self {
        self.outer_header_creation = Some(outer_header_creation);
        self
    }

    /// Adds Traffic Endpoint ID to the Update Forwarding Parameters.
    pub fn with_traffic_endpoint_id(mut self, traffic_endpoint_id: TrafficEndpointId) -> Self {
        self.traffic_endpoint_id = Some(traffic_endpoint_id);
        self
    }

    /// Adds Proxying to the Update Forwarding Parameters.
    pub fn with_proxying(mut self, proxying: Proxying) -> Self {
        self.proxying = Some(proxying);
        self
    }

    /// Adds 3GPP Interface Type to the Update Forwarding Parameters.
    pub fn with_three_gpp_interface_type(
        mut self,
        interface_type: ThreeGppInterfaceTypeIe,
    ) -> Self {
        self.three_gpp_interface_type = Some(interface_type);
        self
    }

    /// Adds Header Enrichment to the Update Forwarding Parameters.
    pub fn with_header_enrichment(mut self, header_enrichment: HeaderEnrichment) -> Self {
        self.header_enrichment = Some(header_enrichment);
        self
    }

    /// Marshals the Update Forwarding Parameters into a byte vector.
    pub fn marshal(&self) -> Vec<u8> {
        let mut ies = Vec::new();

        if let Some(ref di) = self.destination_interface {
            ies.push(di.to_ie());
        }
        if let Some(ref ni) = self.network_instance {
            ies.push(ni.to_ie());
        }
        if let Some(ref tlm) = self.transport_level_marking {
            ies.push(tlm.to_ie());
        }
        if let Some(ref ohc) = self.outer_header_creation {
            ies.push(ohc.to_ie());
        }
        if let Some(ref tei) = self.traffic_endpoint_id {
            ies.push(tei.to_ie());
        }
        if let Some(ref prox) = self.proxying {
            ies.push(prox.to_ie());
        }
        if let Some(ref iface) = self.three_gpp_interface_type {
            ies.push(iface.to_ie());
        }
        if let Some(ref he) = self.header_enrichment {
            ies.push(he.to_ie());
        }

        marshal_ies(&ies)
    }

    /// Unmarshals a byte slice into an Update Forwarding Parameters IE.
    pub fn unmarshal(payload: &[u8]) -> Result<Self, io::Error> {
        let mut destination_interface = None;
        let mut network_instance = None;
        let mut transport_level_marking = None;
        let mut outer_header_creation = None;
        let mut traffic_endpoint_id = None;
        let mut proxying = None;
        let mut three_gpp_interface_type = None;
        let mut header_enrichment = None;

        for ie_result in IeIterator::new(payload) {
            let ie = ie_result?;
            match ie.ie_type {
                IeType::DestinationInterface => {
                    destination_interface = Some(DestinationInterface::unmarshal(&ie.payload)?)
                }
                IeType::NetworkInstance => {
                    network_instance = Some(NetworkInstance::unmarshal(&ie.payload)?)
                }
                IeType::TransportLevelMarking => {
                    transport_level_marking = Some(TransportLevelMarking::unmarshal(&ie.payload)?)
                }
                IeType::OuterHeaderCreation => {
                    outer_header_creation = Some(OuterHeaderCreation::unmarshal(&ie.payload)?)
                }
                IeType::TrafficEndpointId => {
                    traffic_endpoint_id = Some(TrafficEndpointId::unmarshal(&ie.payload)?)
                }
                IeType::Proxying => proxying = Some(Proxying::unmarshal(&ie.payload)?),
                IeType::TgppInterfaceType => {
                    three_gpp_interface_type =
                        Some(ThreeGppInterfaceTypeIe::unmarshal(&ie.payload)?)
                }
                IeType::HeaderEnrichment => {
                    header_enrichment = Some(HeaderEnrichment::unmarshal(&ie.payload)?)
                }
                _ => (),
            }
        }

        Ok(UpdateForwardingParameters {
            destination_interface,
            network_instance,
            transport_level_marking,
            outer_header_creation,
            traffic_endpoint_id,
            proxying,
            three_gpp_interface_type,
            header_enrichment,
        })
    }

    /// Wraps the Update Forwarding Parameters in an UpdateForwardingParameters IE.
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::UpdateForwardingParameters, self.marshal())
    }
}

impl Default for UpdateForwardingParameters {
    fn default() -> Self {
        Self::new()
    }
}
