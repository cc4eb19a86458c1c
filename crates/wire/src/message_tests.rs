// SPDX-License-Identifier: MIT

use super::*;

fn sid(n: u32) -> SwitchId {
    SwitchId::new(n)
}

#[test]
fn register_request_wire_shape() {
    let msg = Message::RegisterRequest(sid(3));
    let bytes = encode(&msg).unwrap();
    assert_eq!(std::str::from_utf8(&bytes).unwrap(), r#"{"action":"register_request","data":3}"#);
    assert_eq!(decode(&bytes).unwrap(), msg);
}

#[test]
fn register_response_wire_shape() {
    let msg = Message::RegisterResponse(RegisterResponseData {
        id: sid(0),
        table: vec![NeighborEntry(sid(1), "10.0.0.1".to_string(), 9000)],
    });
    let bytes = encode(&msg).unwrap();
    let json = std::str::from_utf8(&bytes).unwrap();
    assert!(json.contains(r#""action":"register_response""#));
    assert!(json.contains(r#""table":[[1,"10.0.0.1",9000]]"#));
    assert_eq!(decode(&bytes).unwrap(), msg);
}

#[test]
fn routing_update_wire_shape_with_unreachable_row() {
    let msg = Message::RoutingUpdate(vec![WireRow(0, 0, 0), WireRow(2, -1, 9999)]);
    let bytes = encode(&msg).unwrap();
    let json = std::str::from_utf8(&bytes).unwrap();
    assert!(json.contains(r#""data":[[0,0,0],[2,-1,9999]]"#));
    assert_eq!(decode(&bytes).unwrap(), msg);
}

#[test]
fn topology_update_wire_shape() {
    let msg = Message::TopologyUpdate(crate::topology_report::TopologyReport::new(
        sid(5),
        vec![sid(1), sid(2)],
    ));
    let bytes = encode(&msg).unwrap();
    let json = std::str::from_utf8(&bytes).unwrap();
    assert!(json.contains(r#""action":"topology_update""#));
    assert!(json.contains(r#""data":{"5":[1,2]}"#));
    assert_eq!(decode(&bytes).unwrap(), msg);
}

#[test]
fn keep_alive_wire_shape() {
    let msg = Message::KeepAlive(sid(9));
    let bytes = encode(&msg).unwrap();
    assert_eq!(std::str::from_utf8(&bytes).unwrap(), r#"{"action":"keep_alive","data":9}"#);
    assert_eq!(decode(&bytes).unwrap(), msg);
}

#[test]
fn decode_rejects_unknown_action() {
    let err = decode(br#"{"action":"explode","data":1}"#).unwrap_err();
    assert!(matches!(err, ProtocolError::Malformed(_)));
}

#[test]
fn decode_rejects_garbage_bytes() {
    assert!(decode(b"not json").is_err());
}

#[test]
fn wire_row_roundtrips_reachable_row() {
    let row = sdn_core::RoutingRow::reachable(sid(2), sid(1), 30);
    let wire = WireRow::from(&row);
    assert_eq!(wire, WireRow(2, 1, 30));
    assert_eq!(wire.to_routing_row(), row);
}

#[test]
fn wire_row_roundtrips_unreachable_sentinel() {
    let row = sdn_core::RoutingRow::unreachable(sid(3));
    let wire = WireRow::from(&row);
    assert_eq!(wire, WireRow(3, -1, 9999));
    assert_eq!(wire.to_routing_row(), row);
}
