//! PFD Management Request message.

use crate::ie::application_ids_pfds::ApplicationIdsPfds;
use crate::ie::node_id::NodeId;
use crate::error::PfcpError;
use crate::ie::{Ie, IeType};
use crate::message::{header::Header, Message, MsgType};

/// Represents a PFD Management Request message.
///
/// According to ETSI TS 129 244 V18.10.0, this message contains:
/// - Application ID's PFDs (conditional, one or more)
/// - Node ID (optional)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PfdManagementRequest {
    pub header: Header,
    pub node_id: Option<NodeId>,
    pub application_ids_pfds: Option<Vec<ApplicationIdsPfds>>,
    pub ies: Vec<Ie>,
}

impl PfdManagementRequest {
    /// Creates a new PFD Management Request message.
    pub fn new(
        seq: u32,
        node_id: Option<NodeId>,
        application_ids_pfds: Option<Vec<ApplicationIdsPfds>>,
        ies: Vec<Ie>,
    ) -> Self {
        let mut payload_len = 0;

        if let Some(ref node_id) = node_id {
            payload_len += node_id.to_ie().len();
        }

        if let Some(ref app_pfds) = application_ids_pfds {
            for app_pfd in app_pfds {
                payload_len += app_pfd.to_ie().len();
            }
        }

        for ie in &ies {
            payload_len += ie.len();
        }

        let mut header = Header::new(MsgType::PfdManagementRequest, false, 0, seq);
        header.length = 4 + payload_len;

        PfdManagementRequest {
            header,
            node_id,
            application_ids_pfds,
            ies,
        }
    }
}

impl Message for PfdManagementRequest {
    fn marshal(&self) -> Vec<u8> {
        let mut data = self.header.marshal();

        if let Some(ref node_id) = self.node_id {
            data.extend_from_slice(&node_id.to_ie().marshal());
        }

        if let Some(ref app_pfds) = self.application_ids_pfds {
            for app_pfd in app_pfds {
                data.extend_from_slice(&app_pfd.to_ie().marshal());
            }
        }

        for ie in &self.ies {
            data.extend_from_slice(&ie.marshal());
        }
        data
    }

    fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        let header = Header::unmarshal(data)?;
        let mut node_id = None;
        let mut application_ids_pfds = None;
        let mut ies = Vec::new();

        let mut offset = header.len() as usize;
        while offset < data.len() {
            let ie = Ie::unmarshal(&data[offset..])?;
            let ie_len = ie.len() as usize;
            match ie.ie_type {
                IeType::NodeId => {
                    if node_id.is_some() {
                        return Err(PfcpError::invalid_value(
                            "Node ID",
                            "duplicate",
                            "PfdManagementRequest must carry at most one Node ID IE",
                        ));
                    }
                    node_id = Some(NodeId::unmarshal(&ie.payload)?);
                }
                IeType::ApplicationIdsPfds => {
                    let typed_ie = ApplicationIdsPfds::unmarshal(&ie.payload)?;
                    application_ids_pfds
                        .get_or_insert(Vec::new())
                        .push(typed_ie);
                }
                _ => ies.push(ie),
            }
            offset += ie_len;
        }

        Ok(PfdManagementRequest {
            header,
            node_id,
            application_ids_pfds,
            ies,
        })
    }

    fn msg_type(&self) -> MsgType {
        MsgType::PfdManagementRequest
    }

    fn seid(&self) -> Option<u64> {
        if self.header.has_seid {
            Some(self.header.seid)
        } else {
            None
        }
    }

    fn sequence(&self) -> u32 {
        self.header.sequence_number
    }

    fn set_sequence(&mut self, seq: u32) {
        self.header.sequence_number = seq;
    }

    fn find_ie(&self, ie_type: IeType) -> Option<&Ie> {
        match ie_type {
            IeType::NodeId => {
                // For type-safe implementation, we need to convert on-demand
                // This is not ideal, but maintains compatibility with the trait
                // In practice, users should access the typed fields directly
                None // Type-safe access via .node_id field
            }
            IeType::ApplicationIdsPfds => {
                // Type-safe access via .application_ids_pfds field
                None
            }
            _ => self.ies.iter().find(|ie| ie.ie_type == ie_type),
        }
    }

    fn find_all_ies(&self, ie_type: IeType) -> Vec<&Ie> {
        match ie_type {
            IeType::NodeId => {
                // Type-safe access via .node_id field
                vec![]
            }
            IeType::ApplicationIdsPfds => {
                // Type-safe access via .application_ids_pfds field
                vec![]
            }
            _ => {
                if let Some(ie) = self.find_ie(ie_type) {
                    vec![ie]
                } else {
                    vec![]
                }
            }
        }
    }

    fn all_ies(&self) -> Vec<&Ie> {
        // Note: PfdManagementRequest uses type-safe fields (NodeId and ApplicationIdsPfds)
        // that are not stored as Ie. Only return IEs from the ies vector.
        self.ies.iter().collect()
    }
}

/// Builder for PfdManagementRequest message.
#[derive(Debug, Default)]
pub struct PfdManagementRequestBuilder {
    sequence: u32,
    node_id: Option<NodeId>,
    application_ids_pfds: Option<Vec<ApplicationIdsPfds>>,
    ies: Vec<Ie>,
}

impl PfdManagementRequestBuilder {
    /// Creates a new PfdManagementRequest builder.
    pub fn new(sequence: u32) -> Self {
        Self {
            sequence,
            node_id: None,
            application_ids_pfds: None,
            ies: Vec::new(),
        }
    }

    /// Sets the optional Node ID.
    pub fn node_id(mut self, node_id: NodeId) -> Self {
        self.node_id = Some(node_id);
        self
    }

    /// Adds an Application IDs PFDs.
    pub fn application_ids_pfds(mut self, application_ids_pfds: ApplicationIdsPfds) -> Self {
        self.application_ids_pfds
            .get_or_insert(Vec::new())
            .push(application_ids_pfds);
        self
    }

    /// Adds multiple Application IDs PFDs.
    pub fn application_ids_pfds_vec(
        mut self,
        application_ids_pfds: Vec<ApplicationIdsPfds>,
    ) -> Self {
        if let Some(existing) = &mut self.application_ids_pfds {
            existing.extend(application_ids_pfds);
        } else {
            self.application_ids_pfds = Some(application_ids_pfds);
        }
        self
    }

    /// Adds an additional IE (non-ApplicationIdsPfds).
    pub fn ie(mut self, ie: Ie) -> Self {
        self.ies.push(ie);
        self
    }

    /// Adds multiple additional IEs (non-ApplicationIdsPfds).
    pub fn ies(mut self, mut ies: Vec<Ie>) -> Self {
        self.ies.append(&mut ies);
        self
    }

    /// Builds the PfdManagementRequest message.
    pub fn build(self) -> PfdManagementRequest {
        PfdManagementRequest::new(
            self.sequence,
            self.node_id,
            self.application_ids_pfds,
            self.ies,
        )
    }
}
