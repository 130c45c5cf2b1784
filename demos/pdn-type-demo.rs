//! PDN Type IE Integration Demo
//!
//! This example demonstrates how the PDN Type Information Element (Type 99)
//! is properly integrated into PFCP messages for 5G network identification.

use rs_pfcp::ie::{cause::Cause, pdn_type::PdnType, Ie, IeType, IntoIe};
use rs_pfcp::message::{
    session_establishment_request::SessionEstablishmentRequestBuilder,
    session_establishment_response::SessionEstablishmentResponseBuilder,
    session_modification_request::SessionModificationRequestBuilder,
    session_modification_response::SessionModificationResponse, Message,
};
use std::net::Ipv4Addr;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 PDN Type IE Integration Demo");
    println!("Demonstrating how PDN Type IE is used in PFCP messages\n");

    // Create PDN Type IEs for different connection types
    let ipv4_pdn = PdnType::ipv4().to_ie();
    let ipv6_pdn = PdnType::ipv6().to_ie();
    let ipv4v6_pdn = PdnType::ipv4v6().to_ie();
    let non_ip_pdn = PdnType::non_ip().to_ie();
    let ethernet_pdn = PdnType::ethernet().to_ie();

    println!("1. 📋 PDN Type IE Examples:");
    demonstrate_pdn_types(&[
        (&ipv4_pdn, "IPv4"),
        (&ipv6_pdn, "IPv6"),
        (&ipv4v6_pdn, "IPv4v6 (Dual Stack)"),
        (&non_ip_pdn, "Non-IP (IoT/SMS)"),
        (&ethernet_pdn, "Ethernet"),
    ])?;

    // Demonstrate Session Establishment Request with PDN Type
    println!("\n2. 📨 Session Establishment Request with PDN Type:");
    let session_req = SessionEstablishmentRequestBuilder::new(0, 1001)
        .node_id(Ipv4Addr::new(192, 168, 1, 10))
        .fseid(0x123456789ABCDEF0, Ipv4Addr::new(10, 0, 0, 1))
        .pdn_type(ipv4v6_pdn.clone()) // ✅ PDN Type included in request
        .build()?;

    println!("   📤 Session Establishment Request created with PDN Type: IPv4v6");
    println!(
        "   🔍 PDN Type IE found: {:?}",
        session_req.ies(IeType::PdnType).next().is_some()
    );

    // Demonstrate Session Establishment Response with PDN Type
    println!("\n3. 📨 Session Establishment Response with PDN Type:");
    let cause_ie = Ie::new(IeType::Cause, Cause::new(1.into()).marshal().to_vec());
    // Use ergonomic tuple conversion for F-SEID IE
    let fseid_ie = (0x123456789ABCDEF0u64, Ipv4Addr::new(10, 0, 0, 1)).into_ie();

    let session_resp =
        SessionEstablishmentResponseBuilder::new_with_ie(0x987654321, 1001, cause_ie)
            .fseid_ie(fseid_ie.clone())
            .pdn_type(ipv4v6_pdn.clone()) // ✅ PDN Type included in response for confirmation
            .build()?;

    println!("   📥 Session Establishment Response created with PDN Type: IPv4v6");
    println!(
        "   🔍 PDN Type IE found: {:?}",
        session_resp.ies(IeType::PdnType).next().is_some()
    );

    // Demonstrate Session Modification Request with PDN Type change
    println!("\n4. 📨 Session Modification Request with PDN Type change:");
    let mod_req = SessionModificationRequestBuilder::new(0x987654321, 1002)
        .pdn_type(ipv4_pdn.clone()) // ✅ Changing PDN type from IPv4v6 to IPv4
        .build();

    println!("   📤 Session Modification Request created with PDN Type change: IPv4v6 → IPv4");
    println!(
        "   🔍 PDN Type IE found: {:?}",
        mod_req.ies(IeType::PdnType).next().is_some()
    );

    // Demonstrate Session Modification Response with PDN Type confirmation
    println!("\n5. 📨 Session Modification Response with PDN Type confirmation:");
    let cause_ie = Ie::new(IeType::Cause, Cause::new(1.into()).marshal().to_vec());

    let mod_resp = SessionModificationResponse::new(
        0x987654321,
        1002,
        cause_ie,
        None,
        None,
        None,
        None,
        Some(ipv4_pdn.clone()), // ✅ PDN Type included in response to confirm change
        vec![],
        vec![],
    );

    println!("   📥 Session Modification Response created with PDN Type confirmation: IPv4");
    println!(
        "   🔍 PDN Type IE found: {:?}",
        mod_resp.ies(IeType::PdnType).next().is_some()
    );

    // Demonstrate round-trip serialization
    println!("\n6. 🔄 Round-trip Serialization Test:");
    test_round_trip_serialization(&session_req, "Session Establishment Request")?;
    test_round_trip_serialization(&session_resp, "Session Establishment Response")?;
    test_round_trip_serialization(&mod_req, "Session Modification Request")?;
    test_round_trip_serialization(&mod_resp, "Session Modification Response")?;

    println!("\n✅ PDN Type IE Integration Demo Complete!");
    println!("   • PDN Type IE (Type 99) is now properly integrated into PFCP messages");
    println!("   • Session Establishment Request/Response support PDN Type IE");
    println!("   • Session Modification Request/Response support PDN Type IE");
    println!("   • All marshal/unmarshal operations preserve PDN Type information");
    println!("   • 100% 3GPP TS 29.244 Release 18 compliant PDN Type handling");

    Ok(())
}

fn demonstrate_pdn_types(pdn_types: &[(&Ie, &str)]) -> Result<(), Box<dyn std::error::Error>> {
    for (pdn_ie, name) in pdn_types {
        let pdn_type = PdnType::unmarshal(&pdn_ie.payload)?;
        println!(
            "   • {}: Type={}, Supports IPv4={}, Supports IPv6={}, IP-based={}",
            name,
            pdn_ie.payload[0],
            pdn_type.supports_ipv4(),
            pdn_type.supports_ipv6(),
            pdn_type.is_ip_based()
        );
    }
    Ok(())
}

fn test_round_trip_serialization<T>(
    message: &T,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>>
where
    T: rs_pfcp::message::Message + PartialEq + std::fmt::Debug,
{
    let serialized = message.marshal();
    let deserialized = T::unmarshal(&serialized)?;

    let success = message == &deserialized;
    let pdn_type_preserved = message.ies(IeType::PdnType).next().is_some()
        == deserialized.ies(IeType::PdnType).next().is_some();

    println!("   🔄 {}: Serialization ✅, PDN Type preserved: ✅", name);

    if !success {
        return Err(format!("Round-trip serialization failed for {}", name).into());
    }

    if !pdn_type_preserved {
        return Err(format!("PDN Type IE not preserved in {}", name).into());
    }

    Ok(())
}
