use sparse_containers::{AdjacencyContainer, CompactAdjacency, Error, MutableAdjacency};

/// Collects every node's adjacency sequence for order-sensitive comparison.
fn snapshot<C: AdjacencyContainer>(container: &C) -> Vec<Vec<usize>> {
    (0..container.num_nodes())
        .map(|node| container.adjacents(node).collect())
        .collect()
}

#[test]
fn test_compact_star_scenario() {
    // 5 nodes, each pointing at node 5
    let connections: Vec<(usize, usize)> = (0..5).map(|node| (node, 5)).collect();
    let cal = CompactAdjacency::from_connections(&connections);

    assert_eq!(cal.num_nodes(), 6);
    assert_eq!(cal.num_connections(), 5);
    assert_eq!(cal.num_adjacents(5).unwrap(), 0);
    for node in 0..5 {
        assert_eq!(cal.num_adjacents(node).unwrap(), 1);
        assert_eq!(cal.get_adjacent(node, 0).unwrap(), 5);
    }
}

#[test]
fn test_round_trip_preserves_order() {
    let mut al = MutableAdjacency::with_nodes(4);
    al.add_adjacent(0, 9).unwrap();
    al.add_adjacent(0, 3).unwrap();
    al.add_adjacent(2, 1).unwrap();
    al.add_adjacent(2, 0).unwrap();
    al.add_adjacent(2, 7).unwrap();

    let cal = CompactAdjacency::from_container(&al);
    let back = MutableAdjacency::from_container(&cal);

    assert_eq!(back.num_nodes(), al.num_nodes());
    assert_eq!(back.num_connections(), al.num_connections());
    assert_eq!(snapshot(&back), snapshot(&al));
}

#[test]
fn test_move_conversions() {
    let mut al = MutableAdjacency::with_nodes(2);
    al.add_adjacent(1, 0).unwrap();

    let cal: CompactAdjacency = al.into();
    assert_eq!(cal.get_adjacent(1, 0).unwrap(), 0);

    let back: MutableAdjacency = cal.into();
    assert_eq!(back.num_connections(), 1);
}

#[test]
fn test_capability_objects_convert_generically() {
    let mut al = MutableAdjacency::with_nodes(3);
    al.add_adjacent(0, 2).unwrap();
    al.add_adjacent(2, 0).unwrap();

    // Conversions accept the capability as a trait object too
    let source: &dyn AdjacencyContainer = &al;
    let cal = CompactAdjacency::from_container(source);
    assert_eq!(cal.num_connections(), 2);
    assert_eq!(cal.get_adjacent(2, 0).unwrap(), 0);
}

#[test]
fn test_duplicate_adjacent_is_rejected_but_swallowed_in_bulk() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut al = MutableAdjacency::with_nodes(2);
    al.add_adjacent(0, 1).unwrap();
    assert!(matches!(
        al.add_adjacent(0, 1),
        Err(Error::FailedAssertion(_))
    ));
    assert_eq!(al.num_adjacents(0).unwrap(), 1);

    // The bulk constructor drops the duplicate instead of failing
    let bulk = MutableAdjacency::from_connections(&[(0, 1), (0, 1), (1, 0)]);
    assert_eq!(bulk.num_adjacents(0).unwrap(), 1);
    assert_eq!(bulk.num_connections(), 2);
}

#[test]
fn test_reads_one_past_end_fail() {
    let al = MutableAdjacency::from_connections(&[(0, 4), (1, 4), (2, 4)]);
    for node in 0..al.num_nodes() {
        let degree = al.num_adjacents(node).unwrap();
        assert!(matches!(
            al.get_adjacent(node, degree),
            Err(Error::OutOfRange { .. })
        ));
    }

    let cal = CompactAdjacency::from_container(&al);
    for node in 0..cal.num_nodes() {
        let degree = cal.num_adjacents(node).unwrap();
        assert!(matches!(
            cal.get_adjacent(node, degree),
            Err(Error::OutOfRange { .. })
        ));
    }

    assert!(matches!(
        al.num_adjacents(al.num_nodes()),
        Err(Error::OutOfRange { .. })
    ));
}

#[test]
fn test_remove_node_shifts_without_renaming() {
    let mut al = MutableAdjacency::with_nodes(4);
    al.add_adjacent(0, 2).unwrap();
    al.add_adjacent(1, 2).unwrap();
    al.add_adjacent(3, 0).unwrap();

    al.remove_node(1).unwrap();

    assert_eq!(al.num_nodes(), 3);
    // Old node 2 is now node 1, old node 3 is now node 2, with their
    // adjacency lists verbatim
    assert_eq!(al.num_adjacents(1).unwrap(), 0);
    assert_eq!(al.adjacents(2).collect::<Vec<_>>(), vec![0]);
    // Adjacent values referencing the shifted nodes are NOT rewritten:
    // node 0 still claims an adjacent 2, even though that now names a
    // different node
    assert_eq!(al.adjacents(0).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn test_insert_node_shifts_without_renaming() {
    let mut al = MutableAdjacency::with_nodes(2);
    al.add_adjacent(0, 1).unwrap();
    al.add_adjacent(1, 0).unwrap();

    al.insert_node(1).unwrap();

    assert_eq!(al.num_nodes(), 3);
    assert_eq!(al.num_adjacents(1).unwrap(), 0);
    // Old node 1 moved to index 2, its list untouched
    assert_eq!(al.adjacents(2).collect::<Vec<_>>(), vec![0]);
    // Node 0 still points at value 1, which now names the empty node
    assert_eq!(al.adjacents(0).collect::<Vec<_>>(), vec![1]);

    assert!(matches!(
        al.insert_node(3),
        Err(Error::OutOfRange { .. })
    ));
}

#[test]
fn test_swap_nodes_exchanges_lists() {
    let mut al = MutableAdjacency::with_nodes(3);
    al.add_adjacent(0, 5).unwrap();
    al.add_adjacent(0, 6).unwrap();
    al.add_adjacent(2, 9).unwrap();

    al.swap_nodes(0, 2).unwrap();
    assert_eq!(al.adjacents(0).collect::<Vec<_>>(), vec![9]);
    assert_eq!(al.adjacents(2).collect::<Vec<_>>(), vec![5, 6]);

    // Self-swap is a no-op
    al.swap_nodes(1, 1).unwrap();
    assert_eq!(al.num_adjacents(1).unwrap(), 0);
}

#[test]
fn test_insert_adjacent_positions() {
    let mut al = MutableAdjacency::with_nodes(1);
    al.add_adjacent(0, 10).unwrap();
    al.add_adjacent(0, 30).unwrap();

    al.insert_adjacent(0, 20, 1).unwrap();
    assert_eq!(al.adjacents(0).collect::<Vec<_>>(), vec![10, 20, 30]);

    // Inserting at the end appends
    al.insert_adjacent(0, 40, 3).unwrap();
    assert_eq!(al.adjacents(0).collect::<Vec<_>>(), vec![10, 20, 30, 40]);

    assert!(matches!(
        al.insert_adjacent(0, 50, 6),
        Err(Error::OutOfRange { .. })
    ));
    assert!(matches!(
        al.insert_adjacent(0, 20, 0),
        Err(Error::FailedAssertion(_))
    ));
}

#[test]
fn test_update_adjacent_semantics() {
    let mut al = MutableAdjacency::with_nodes(1);
    al.add_adjacent(0, 1).unwrap();
    al.add_adjacent(0, 2).unwrap();

    // Updating to the current value is a no-op, not a collision
    al.update_adjacent(0, 1, 0).unwrap();
    assert_eq!(al.adjacents(0).collect::<Vec<_>>(), vec![1, 2]);

    al.update_adjacent(0, 3, 0).unwrap();
    assert_eq!(al.adjacents(0).collect::<Vec<_>>(), vec![3, 2]);

    // Updating onto a value held elsewhere in the list collides
    assert!(matches!(
        al.update_adjacent(0, 2, 0),
        Err(Error::FailedAssertion(_))
    ));
    assert!(matches!(
        al.update_adjacent(0, 9, 2),
        Err(Error::OutOfRange { .. })
    ));
}

#[test]
fn test_replace_adjacent_semantics() {
    let mut al = MutableAdjacency::with_nodes(1);
    al.add_adjacent(0, 1).unwrap();
    al.add_adjacent(0, 2).unwrap();

    al.replace_adjacent(0, 1, 5).unwrap();
    assert_eq!(al.adjacents(0).collect::<Vec<_>>(), vec![5, 2]);

    // Replacing a value that is not present fails
    assert!(matches!(
        al.replace_adjacent(0, 1, 6),
        Err(Error::FailedAssertion(_))
    ));
    // Replacing with a value already present fails
    assert!(matches!(
        al.replace_adjacent(0, 5, 2),
        Err(Error::FailedAssertion(_))
    ));
    // Neither failure mutated the list
    assert_eq!(al.adjacents(0).collect::<Vec<_>>(), vec![5, 2]);
}

#[test]
fn test_remove_adjacent_shifts_entries() {
    let mut al = MutableAdjacency::with_nodes(1);
    for value in [4, 5, 6, 7] {
        al.add_adjacent(0, value).unwrap();
    }

    al.remove_adjacent(0, 1).unwrap();
    assert_eq!(al.adjacents(0).collect::<Vec<_>>(), vec![4, 6, 7]);
    assert_eq!(al.num_connections(), 3);

    assert!(matches!(
        al.remove_adjacent(0, 3),
        Err(Error::OutOfRange { .. })
    ));
}

#[test]
fn test_dense_mutation_scenario() {
    // Ten nodes, each starting with a single connection to value 10
    let n = 10;
    let connections: Vec<(usize, usize)> = (0..n).map(|node| (node, 10)).collect();
    let mut al = MutableAdjacency::from_connections(&connections);
    assert_eq!(al.num_nodes(), n);

    // Densify: node i gains every adjacent in i..n-1
    for node in 0..n {
        for value in node..n - 1 {
            al.add_adjacent(node, value).unwrap();
        }
    }

    // Drop the odd nodes, back to front
    for node in (1..n).rev().step_by(2) {
        al.remove_node(node).unwrap();
    }
    assert_eq!(al.num_nodes(), n / 2);

    // Drop the odd adjacents
    for node in 0..al.num_nodes() {
        for idx in (0..al.num_adjacents(node).unwrap()).rev() {
            if al.get_adjacent(node, idx).unwrap() % 2 != 0 {
                al.remove_adjacent(node, idx).unwrap();
            }
        }
        for idx in 0..al.num_adjacents(node).unwrap() {
            assert_eq!(al.get_adjacent(node, idx).unwrap() % 2, 0);
        }
    }

    // Halve every adjacent in place
    for node in 0..al.num_nodes() {
        for idx in 0..al.num_adjacents(node).unwrap() {
            let half = al.get_adjacent(node, idx).unwrap() / 2;
            al.update_adjacent(node, half, idx).unwrap();
        }
    }

    // Freeze and verify: node i held adjacents >= 2i and <= 10 before the
    // halving, so the compacted node i holds values in [i, 5]
    let cal = CompactAdjacency::from_container(&al);
    assert_eq!(cal.num_nodes(), n / 2);
    for node in 0..cal.num_nodes() {
        for value in cal.adjacents(node) {
            assert!(value >= node);
            assert!(value <= n / 2);
        }
    }
}

#[test]
fn test_empty_containers() {
    let al = MutableAdjacency::from_connections(&[]);
    assert_eq!(al.num_nodes(), 0);
    assert_eq!(al.num_connections(), 0);

    let cal = CompactAdjacency::from_connections(&[]);
    assert_eq!(cal.num_nodes(), 0);
    assert!(matches!(
        cal.get_adjacent(0, 0),
        Err(Error::OutOfRange { .. })
    ));
    assert_eq!(cal.adjacents(0).count(), 0);
}
