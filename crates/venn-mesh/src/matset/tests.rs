use super::*;
use crate::classify::FractionTable;
use crate::region::REGION_COUNT;

// Three cells: pure background, an A/AB/ABC mix, pure C.
fn small_table() -> FractionTable {
    FractionTable {
        nx: 3,
        ny: 1,
        rows: vec![
            [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 0.25, 0.0, 0.0, 0.5, 0.0, 0.0, 0.25],
            [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        ],
    }
}

#[test]
fn parse_known_names_and_reject_others() {
    for t in MatsetType::ALL {
        assert_eq!(t.as_str().parse::<MatsetType>(), Ok(t));
        assert_eq!(t.to_string(), t.as_str());
    }
    assert_eq!(
        "bogus".parse::<MatsetType>(),
        Err(VennError::UnsupportedMatsetType("bogus".into()))
    );
    // No case folding or trimming.
    assert!("Full".parse::<MatsetType>().is_err());
    assert!(" full".parse::<MatsetType>().is_err());
}

#[test]
fn full_is_dense_cell_major() {
    let m = encode(&small_table(), MatsetType::Full);
    let Matset::Full {
        num_elements,
        volume_fractions,
    } = &m
    else {
        panic!("expected full matset");
    };
    assert_eq!(*num_elements, 3);
    assert_eq!(volume_fractions.len(), 24);
    assert_eq!(volume_fractions[8 + 4], 0.5);
    assert_eq!(m.num_entries(), 24);
}

#[test]
fn sparse_by_material_lists_cells_per_material() {
    let m = encode(&small_table(), MatsetType::SparseByMaterial);
    let Matset::SparseByMaterial {
        materials,
        element_counts,
        ..
    } = &m
    else {
        panic!("expected sparse_by_material");
    };
    assert_eq!(element_counts, &vec![1, 1, 0, 1, 1, 0, 0, 1]);
    assert_eq!(materials[0].element_ids, vec![0]);
    assert_eq!(materials[4].element_ids, vec![1]);
    assert_eq!(materials[4].volume_fractions, vec![0.5]);
    assert!(materials[2].is_empty());
    assert_eq!(m.num_entries(), 5);
}

#[test]
fn sparse_by_element_has_offsets_and_sizes() {
    let m = encode(&small_table(), MatsetType::SparseByElement);
    let Matset::SparseByElement {
        material_ids,
        volume_fractions,
        sizes,
        offsets,
    } = &m
    else {
        panic!("expected sparse_by_element");
    };
    assert_eq!(sizes, &vec![1, 3, 1]);
    assert_eq!(offsets, &vec![0, 1, 4]);
    assert_eq!(material_ids, &vec![0, 1, 4, 7, 3]);
    assert_eq!(volume_fractions, &vec![1.0, 0.25, 0.5, 0.25, 1.0]);
    assert!(volume_fractions.iter().all(|&f| f > 0.0));
}

#[test]
fn every_layout_decodes_to_the_table() {
    let table = small_table();
    for kind in MatsetType::ALL {
        let m = encode(&table, kind);
        assert_eq!(m.matset_type(), kind);
        assert_eq!(m.num_elements(), 3);
        assert_eq!(m.to_dense(), table.rows, "{kind}");
        assert_eq!(m.fraction(1, Region::AB.id()), 0.5);
        assert_eq!(m.fraction(1, Region::BC.id()), 0.0);
        assert_eq!(m.fraction(2, Region::C.id()), 1.0);
        // Out-of-range lookups never alias a neighbouring cell's entries.
        // Dense index 9 is cell 1's A entry (0.25), index 19 is cell 2's C.
        assert_eq!(m.fraction(0, REGION_COUNT + 1), 0.0);
        assert_eq!(m.fraction(1, REGION_COUNT + 3), 0.0);
        assert_eq!(m.fraction(3, Region::Background.id()), 0.0);
    }
}

#[test]
fn matset_values_follow_matset_layout() {
    let table = small_table();
    let weight = |_: usize, r: Region, vf: f64| r.importance() * vf;
    match encode(&table, MatsetType::Full).map_values(weight) {
        MatsetValues::Full { values } => {
            assert_eq!(values.len(), 24);
            assert!((values[8 + 7] - 0.25).abs() < 1e-12);
        }
        other => panic!("unexpected {other:?}"),
    }
    match encode(&table, MatsetType::SparseByMaterial).map_values(weight) {
        MatsetValues::SparseByMaterial { values } => {
            let lens: Vec<_> = values.iter().map(Vec::len).collect();
            assert_eq!(lens, vec![1, 1, 0, 1, 1, 0, 0, 1]);
            assert!((values[3][0] - 0.3).abs() < 1e-12);
        }
        other => panic!("unexpected {other:?}"),
    }
    match encode(&table, MatsetType::SparseByElement).map_values(|cell, _, _| cell as f64) {
        MatsetValues::SparseByElement { values } => {
            assert_eq!(values, vec![0.0, 1.0, 1.0, 1.0, 2.0]);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn material_map_is_canonical() {
    let map = Matset::material_map();
    assert_eq!(map.len(), 8);
    assert_eq!(map["background"], 0);
    assert_eq!(map["abc"], 7);
    assert_eq!(map["ac"], 5);
}
