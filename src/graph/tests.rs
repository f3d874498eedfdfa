use super::*;

#[test]
fn test_heads_empty_until_edge_added() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        let b = graph.new_node(());
        for n in [a, b] {
            assert!(graph.first_outgoing(n).is_none());
            assert!(graph.first_incoming(n).is_none());
        }

        let e = graph.new_edge(a, b, ());
        assert_eq!(graph.first_outgoing(a), Some(e));
        assert!(graph.first_incoming(a).is_none());
        assert_eq!(graph.first_incoming(b), Some(e));
        assert!(graph.first_outgoing(b).is_none());
    });
}

#[test]
fn test_single_edge_scenario() {
    Graph::<(), ()>::scope(|mut graph| {
        let n1 = graph.new_node(());
        let n2 = graph.new_node(());
        let e = graph.new_edge(n1, n2, ());

        assert_eq!(graph.succs(n1).collect::<Vec<_>>(), vec![e]);
        assert_eq!(graph.preds(n2).collect::<Vec<_>>(), vec![e]);
        assert_eq!(graph.preds(n1).count(), 0);
        assert_eq!(graph.succs(n2).count(), 0);

        let record = graph.edge(e);
        assert_eq!(record.pred(), n1);
        assert_eq!(record.succ(), n2);
        assert_eq!(record.node_in_dir(Direction::Down), n2);
        assert_eq!(record.chain_owner(Direction::Down), n1);
        assert!(record.is_linked(Direction::Up) && record.is_linked(Direction::Down));
    });
}

#[test]
fn test_chains_are_lifo() {
    Graph::<(), u32>::scope(|mut graph| {
        let hub = graph.new_node(());
        let leaf = graph.new_node(());

        let outs: Vec<_> = (0..5).map(|i| graph.new_edge(hub, leaf, i)).collect();
        let mut expected = outs.clone();
        expected.reverse();

        assert_eq!(graph.succs(hub).collect::<Vec<_>>(), expected);
        assert_eq!(graph.preds(leaf).collect::<Vec<_>>(), expected);

        let weights: Vec<_> = graph.succs(hub).map(|e| *graph.edge_payload(e)).collect();
        assert_eq!(weights, vec![4, 3, 2, 1, 0]);
    });
}

#[test]
fn test_pop_head_moves_to_second() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        let b = graph.new_node(());
        let e1 = graph.new_edge(a, b, ());
        let e2 = graph.new_edge(a, b, ());

        graph.remove_outgoing(a, e2).unwrap();
        assert_eq!(graph.first_outgoing(a), Some(e1));
        assert!(!graph.edge(e2).is_linked(Direction::Down));
        // The incoming side is independent.
        assert_eq!(graph.preds(b).collect::<Vec<_>>(), vec![e2, e1]);

        graph.remove_incoming(b, e2).unwrap();
        assert_eq!(graph.first_incoming(b), Some(e1));
    });
}

#[test]
fn test_non_head_removal_reports_and_keeps_chain() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        let b = graph.new_node(());
        let e1 = graph.new_edge(a, b, ());
        let e2 = graph.new_edge(a, b, ());

        let err = graph.remove_outgoing(a, e1).unwrap_err();
        match err {
            GraphError::NotChainHead { node, edge, dir } => {
                assert_eq!(node, graph.node(a).uid());
                assert_eq!(edge, graph.edge(e1).uid());
                assert_eq!(dir, Direction::Down);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(graph.succs(a).collect::<Vec<_>>(), vec![e2, e1]);
    });
}

#[test]
fn test_non_head_removal_is_noop_when_lenient() {
    let config = GraphConfig::default().with_strict_removal(false);
    Graph::<(), ()>::scope_with(config, |mut graph| {
        let a = graph.new_node(());
        let b = graph.new_node(());
        let e1 = graph.new_edge(a, b, ());
        let e2 = graph.new_edge(a, b, ());

        assert!(graph.remove_incoming(b, e1).is_ok());
        assert_eq!(graph.preds(b).collect::<Vec<_>>(), vec![e2, e1]);
    });
}

#[test]
fn test_readd_after_pop() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        let b = graph.new_node(());
        let e1 = graph.new_edge(a, b, ());
        let e2 = graph.new_edge(a, b, ());

        graph.remove_outgoing(a, e2).unwrap();
        graph.remove_outgoing(a, e1).unwrap();
        assert!(graph.first_outgoing(a).is_none());

        graph.add_outgoing(a, e1);
        graph.add_outgoing(a, e2);
        assert_eq!(graph.succs(a).collect::<Vec<_>>(), vec![e2, e1]);
    });
}

#[test]
#[should_panic(expected = "already linked")]
#[cfg(debug_assertions)]
fn test_double_attach_panics() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        let b = graph.new_node(());
        let e1 = graph.new_edge(a, b, ());
        let _e2 = graph.new_edge(a, b, ());
        // e1 is on the chain but not its head.
        graph.add_outgoing(a, e1);
    });
}

#[test]
#[should_panic(expected = "does not belong")]
#[cfg(debug_assertions)]
fn test_wrong_endpoint_panics() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        let b = graph.new_node(());
        let e = graph.new_edge(a, b, ());
        graph.remove_outgoing(a, e).unwrap();
        graph.add_outgoing(b, e);
    });
}

#[test]
fn test_undirected_preds_then_succs() {
    Graph::<u8, ()>::scope(|mut graph| {
        let center = graph.new_node(0);
        let p1 = graph.new_node(1);
        let p2 = graph.new_node(2);
        let s1 = graph.new_node(3);
        let s2 = graph.new_node(4);
        let s3 = graph.new_node(5);

        let in1 = graph.new_edge(p1, center, ());
        let out1 = graph.new_edge(center, s1, ());
        let in2 = graph.new_edge(p2, center, ());
        let out2 = graph.new_edge(center, s2, ());
        let out3 = graph.new_edge(center, s3, ());

        let pairs: Vec<_> = graph.undirected(center).neighbors().collect();
        assert_eq!(
            pairs,
            vec![(in2, p2), (in1, p1), (out3, s3), (out2, s2), (out1, s1)]
        );

        // Phase flips exactly when the incoming chain runs out.
        let mut it = graph.undirected(center);
        let mut phases = Vec::new();
        while !it.is_end() {
            phases.push(it.cursor().in_pred_phase());
            it.advance();
        }
        assert_eq!(phases, vec![true, true, false, false, false]);
        assert!(!it.cursor().in_pred_phase());
    });
}

#[test]
fn test_undirected_without_preds_starts_in_succ_phase() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        let b = graph.new_node(());
        let e = graph.new_edge(a, b, ());

        let it = graph.undirected(a);
        assert!(!it.cursor().in_pred_phase());
        assert_eq!(it.edge(), Some(e));
        assert_eq!(it.node(), Some(b));

        let it = graph.undirected(b);
        assert!(it.cursor().in_pred_phase());
        assert_eq!(it.node(), Some(a));
    });
}

#[test]
fn test_self_loop_seen_from_both_sides() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        let e = graph.new_edge(a, a, ());
        assert!(graph.edge(e).is_self_loop());

        let pairs: Vec<_> = graph.undirected(a).neighbors().collect();
        assert_eq!(pairs, vec![(e, a), (e, a)]);

        graph.delete_edge(e).unwrap();
        assert!(graph.first_outgoing(a).is_none());
        assert!(graph.first_incoming(a).is_none());
        graph.delete_node(a).unwrap();
    });
}

#[test]
fn test_iterator_equality_and_end() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        let b = graph.new_node(());
        graph.new_edge(a, b, ());
        graph.new_edge(a, b, ());

        assert_eq!(graph.succs(a), graph.succs(a));
        assert_ne!(graph.succs(a), graph.succs_end());

        let mut it = graph.succs(a);
        it.advance();
        assert_ne!(it, graph.succs_end());
        it.advance();
        assert_eq!(it, graph.succs_end());
        assert!(it.is_end());
        assert!(it.node().is_none());

        // Empty chain: begin is already end.
        let lonely = graph.new_node(());
        assert_eq!(graph.preds(a), graph.preds_end());
        assert_eq!(graph.undirected(lonely), graph.undirected_end());
    });
}

#[test]
#[should_panic(expected = "Edge iterator is at end")]
#[cfg(debug_assertions)]
fn test_advancing_end_panics() {
    Graph::<(), ()>::scope(|graph| {
        let mut it = graph.preds_end();
        it.advance();
    });
}

#[test]
fn test_undirected_equality_ignores_phase() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        let e = graph.new_edge(a, a, ());

        let from_pred = graph.undirected(a);
        let mut from_succ = graph.undirected(a);
        from_succ.advance();

        // Same edge, different phase.
        assert_eq!(from_pred.edge(), Some(e));
        assert_eq!(from_succ.edge(), Some(e));
        assert_eq!(from_pred, from_succ);
    });
}

#[test]
fn test_delete_interior_edge_splices_both_chains() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        let b = graph.new_node(());
        let e1 = graph.new_edge(a, b, ());
        let e2 = graph.new_edge(a, b, ());
        let e3 = graph.new_edge(a, b, ());

        graph.delete_edge(e2).unwrap();
        assert_eq!(graph.succs(a).collect::<Vec<_>>(), vec![e3, e1]);
        assert_eq!(graph.preds(b).collect::<Vec<_>>(), vec![e3, e1]);
        assert_eq!(graph.edge_count(), 2);
        assert!(matches!(graph.delete_edge(e2), Err(GraphError::StaleEdge)));
    });
}

#[test]
fn test_delete_popped_edge() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        let b = graph.new_node(());
        let e1 = graph.new_edge(a, b, ());
        let e2 = graph.new_edge(a, b, ());

        graph.remove_outgoing(a, e2).unwrap();
        graph.delete_edge(e2).unwrap();
        assert_eq!(graph.succs(a).collect::<Vec<_>>(), vec![e1]);
        assert_eq!(graph.preds(b).collect::<Vec<_>>(), vec![e1]);
    });
}

#[test]
fn test_delete_node_requires_no_edges() {
    Graph::<&str, ()>::scope(|mut graph| {
        let a = graph.new_node("a");
        let b = graph.new_node("b");
        let e = graph.new_edge(a, b, ());

        match graph.delete_node(b) {
            Err(GraphError::NodeHasEdges {
                incoming, outgoing, ..
            }) => {
                assert_eq!(incoming, 1);
                assert_eq!(outgoing, 0);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(graph.contains_node(b));

        graph.delete_edge(e).unwrap();
        assert_eq!(graph.delete_node(b).unwrap(), "b");
        assert!(!graph.contains_node(b));
        assert!(graph.try_node(b).is_none());
        assert!(matches!(graph.delete_node(b), Err(GraphError::StaleNode)));
    });
}

#[test]
fn test_delete_node_counts_popped_edges() {
    Graph::<&str, ()>::scope(|mut graph| {
        let a = graph.new_node("a");
        let b = graph.new_node("b");
        let e = graph.new_edge(a, b, ());

        graph.remove_outgoing(a, e).unwrap();
        graph.remove_incoming(b, e).unwrap();
        assert!(graph.first_outgoing(a).is_none());
        assert!(graph.first_incoming(b).is_none());
        assert_eq!(graph.node(a).incident_edges(Direction::Down), 1);
        assert!(graph.node(a).has_edges());

        match graph.delete_node(a) {
            Err(GraphError::NodeHasEdges {
                incoming, outgoing, ..
            }) => {
                assert_eq!(incoming, 0);
                assert_eq!(outgoing, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(graph.contains_node(a));
        // Endpoints of the popped edge still resolve.
        assert!(graph.debug_dump().contains("edge 3: 1 -> 2"));

        graph.delete_edge(e).unwrap();
        assert_eq!(graph.node(b).incident_edges(Direction::Up), 0);
        assert_eq!(graph.delete_node(a).unwrap(), "a");
        assert_eq!(graph.delete_node(b).unwrap(), "b");
    });
}

#[test]
fn test_delete_node_cascade_removes_popped_edges() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        let b = graph.new_node(());
        let c = graph.new_node(());
        let popped = graph.new_edge(b, a, ());
        let keep = graph.new_edge(c, a, ());
        graph.remove_outgoing(b, popped).unwrap();

        graph.delete_node_cascade(b).unwrap();
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![keep]);
        assert!(!graph.contains_edge(popped));
        assert_eq!(graph.preds(a).collect::<Vec<_>>(), vec![keep]);
        assert_eq!(graph.node(a).incident_edges(Direction::Up), 1);
        assert!(graph.debug_dump().contains("edge 5: 3 -> 1"));
    });
}

#[test]
fn test_delete_node_cascade() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        let b = graph.new_node(());
        let c = graph.new_node(());
        graph.new_edge(a, b, ());
        graph.new_edge(b, c, ());
        let keep = graph.new_edge(a, c, ());

        graph.delete_node_cascade(b).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![keep]);
        assert_eq!(graph.succs(a).collect::<Vec<_>>(), vec![keep]);
        assert_eq!(graph.preds(c).collect::<Vec<_>>(), vec![keep]);
    });
}

#[test]
#[should_panic(expected = "stale graph handle")]
fn test_stale_handle_panics_on_access() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        graph.delete_node(a).unwrap();
        let _ = graph.node(a);
    });
}

#[test]
fn test_slot_reuse_does_not_revive_handle() {
    Graph::<u32, ()>::scope(|mut graph| {
        let a = graph.new_node(1);
        graph.delete_node(a).unwrap();
        let b = graph.new_node(2);

        assert_eq!(a.index(), b.index());
        assert!(!graph.contains_node(a));
        assert_eq!(*graph.node_payload(b), 2);
    });
}

#[test]
fn test_uids_monotonic_across_deletion() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        let b = graph.new_node(());
        let e = graph.new_edge(a, b, ());
        let uids = [graph.node(a).uid(), graph.node(b).uid(), graph.edge(e).uid()];
        assert!(uids.windows(2).all(|w| w[0] < w[1]));

        graph.delete_edge(e).unwrap();
        graph.delete_node(b).unwrap();
        let before = graph.peek_uid();
        let c = graph.new_node(());
        assert_eq!(graph.node(c).uid(), before);
        assert!(graph.node(c).uid() > uids[2]);
    });
}

#[test]
fn test_global_lists_keep_creation_order() {
    Graph::<u32, ()>::scope(|mut graph| {
        let ids: Vec<_> = (0..4).map(|i| graph.new_node(i)).collect();
        graph.delete_node(ids[1]).unwrap();
        let tail = graph.new_node(9);

        let values: Vec<_> = graph.nodes().map(|n| *graph.node_payload(n)).collect();
        assert_eq!(values, vec![0, 2, 3, 9]);
        assert_eq!(graph.first_node(), Some(ids[0]));
        assert_eq!(graph.last_node(), Some(tail));
        assert_eq!(graph.node(ids[2]).prev_node(), Some(ids[0]));
        assert_eq!(graph.node(ids[0]).next_node(), Some(ids[2]));
    });
}

#[test]
fn test_payload_id_refresh() {
    use serde_json::{json, Value};

    Graph::<Value, Value>::scope(|mut graph| {
        let a = graph.new_node(json!({ "label": "a" }));
        let b = graph.new_node(json!({ "label": "b" }));
        let e = graph.new_edge(a, b, json!({}));

        graph.refresh_node_id(a);
        assert_eq!(graph.node_payload(a)["id"], json!(graph.node(a).uid().get()));
        // Plain creation leaves the payload alone.
        assert!(graph.node_payload(b).get("id").is_none());

        graph.refresh_all_ids();
        assert_eq!(graph.node_payload(b)["id"], json!(2));
        assert_eq!(graph.edge_payload(e)["id"], json!(3));

        let old = graph.set_node_payload(a, json!({ "label": "renamed" }));
        assert_eq!(old["label"], json!("a"));
        graph.refresh_node_id(a);
        assert_eq!(graph.node_payload(a)["id"], json!(1));
    });
}

#[test]
fn test_with_id_variants_mirror_uid() {
    use serde_json::{json, Value};

    Graph::<Value, Value>::scope(|mut graph| {
        let a = graph.new_node_with_id(json!({ "label": "a" }));
        let b = graph.new_node_with_id(json!({}));
        let e = graph.new_edge_with_id(a, b, json!({ "weight": 2 }));

        assert_eq!(graph.node_payload(a), &json!({ "label": "a", "id": 1 }));
        assert_eq!(graph.node_payload(b)["id"], json!(2));
        assert_eq!(graph.edge_payload(e), &json!({ "weight": 2, "id": 3 }));

        let old = graph.set_node_payload_with_id(a, json!({ "label": "renamed" }));
        assert_eq!(old["label"], json!("a"));
        assert_eq!(graph.node_payload(a), &json!({ "label": "renamed", "id": 1 }));

        graph.set_edge_payload_with_id(e, json!([]));
        assert_eq!(graph.edge_payload(e), &json!([]));
    });
}

#[test]
fn test_dump_display_matches_debug_dump() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        graph.new_edge(a, a, ());
        assert_eq!(graph.dump().to_string(), graph.debug_dump());
        assert!(graph.debug_dump().contains("node 1: succs [2] preds [2]"));
    });
}

#[test]
fn test_debug_dump_lists_chains() {
    Graph::<(), ()>::scope(|mut graph| {
        let a = graph.new_node(());
        let b = graph.new_node(());
        graph.new_edge(a, b, ());
        graph.new_edge(a, b, ());

        let dump = graph.debug_dump();
        assert!(dump.contains("(2 nodes, 2 edges)"));
        assert!(dump.contains("node 1: succs [4, 3] preds []"));
        assert!(dump.contains("node 2: succs [] preds [4, 3]"));
        assert!(dump.contains("edge 3: 1 -> 2"));
    });
}
