// src/model/compounds.rs

/// Reference compound. `elements` lists constituent symbols with
/// duplicates standing in for atom count, e.g. H2O -> ["H", "O", "H"].
#[derive(Debug, Clone, Copy)]
pub struct Compound {
    pub formula: &'static str,
    pub name: &'static str,
    pub elements: &'static [&'static str],
    pub uses: &'static str,
    pub properties: &'static str,
}

macro_rules! compound {
    ($formula:literal, $name:literal, [$($sym:literal),*], $uses:literal, $props:literal) => {
        Compound {
            formula: $formula,
            name: $name,
            elements: &[$($sym),*],
            uses: $uses,
            properties: $props,
        }
    };
}

pub static COMPOUNDS: &[Compound] = &[
    compound!("H2O", "Water", ["H", "O", "H"],
        "Essential for life, solvent",
        "Colorless, odorless, liquid"),
    compound!("CO2", "Carbon Dioxide", ["C", "O", "O"],
        "Used in carbonation, fire extinguishers, and as a greenhouse gas",
        "Colorless, odorless gas at room temperature"),
    compound!("NaCl", "Sodium Chloride", ["Na", "Cl"],
        "Used as table salt, in food preservation, and as a saline solution",
        "White crystalline solid, highly soluble in water"),
    compound!("C6H12O6", "Glucose", ["C", "H", "O"],
        "Primary energy source for cells, used in food and beverages",
        "White crystalline solid, sweet taste, soluble in water"),
    compound!("NH3", "Ammonia", ["N", "H", "H"],
        "Used in fertilizers, cleaning products, and as a refrigerant",
        "Colorless gas with a pungent smell, highly soluble in water"),
    compound!("C2H5OH", "Ethanol", ["C", "H", "O"],
        "Used as an alcohol beverage, in disinfectants, and as a solvent",
        "Colorless liquid with a characteristic odor, flammable, miscible with water"),
    compound!("CaCO3", "Calcium Carbonate", ["Ca", "C", "O"],
        "Used in antacids, calcium supplements, and as a building material",
        "White solid, insoluble in water, reacts with acids"),
    compound!("CH4", "Methane", ["C", "H", "H", "H", "H"],
        "Used as a fuel, in chemical synthesis, and as a refrigerant",
        "Colorless, odorless gas, highly flammable"),
    compound!("C3H8", "Propane", ["C", "H", "H", "H", "H", "H"],
        "Used as a fuel for heating and cooking, in gas grills",
        "Colorless gas, odorless, flammable"),
    compound!("NaHCO3", "Sodium Bicarbonate", ["Na", "H", "C", "O", "O", "O"],
        "Used in baking, as an antacid, and in cleaning",
        "White solid, slightly alkaline, soluble in water"),
    compound!("C2H4", "Ethylene", ["C", "C", "H", "H", "H", "H"],
        "Used in the production of plastics, as a plant hormone",
        "Colorless gas with a sweet odor, flammable"),
    compound!("SiO2", "Silicon Dioxide", ["Si", "O", "O"],
        "Used in glassmaking, as a food additive, and in construction",
        "White solid, insoluble in water, occurs in nature as quartz"),
    compound!("C12H22O11", "Sucrose", ["C", "H", "O"],
        "Used as table sugar, in food products and beverages",
        "White crystalline solid, sweet taste, soluble in water"),
    compound!("SO2", "Sulfur Dioxide", ["S", "O", "O"],
        "Used as a preservative, in the production of sulfuric acid",
        "Colorless gas with a pungent smell, soluble in water"),
    compound!("C6H14", "Hexane", ["C", "H", "H", "H", "H", "H", "H", "H", "H", "H", "H", "H"],
        "Used as a solvent in laboratories and in the extraction of oils",
        "Colorless liquid, highly flammable, insoluble in water"),
    compound!("HCl", "Hydrochloric Acid", ["H", "Cl"],
        "Used in cleaning agents, food processing, and pH regulation",
        "Colorless, strong acid, highly corrosive"),
];

/// Multiset match of a candidate symbol sequence against the catalog.
///
/// Both sides are sorted and compared for exact equality, so order never
/// matters but every atom does: one missing or extra symbol fails the
/// match. The first compound in declaration order wins when several share
/// a multiset (Glucose over Ethanol and Sucrose for {C, H, O}).
pub fn find_match(symbols: &[&str]) -> Option<&'static Compound> {
    let mut candidate: Vec<&str> = symbols.to_vec();
    candidate.sort_unstable();

    COMPOUNDS.iter().find(|c| {
        let mut expected: Vec<&str> = c.elements.to_vec();
        expected.sort_unstable();
        expected == candidate
    })
}

/// The four info panel lines for a matched compound.
pub fn info_lines(compound: &Compound) -> Vec<String> {
    vec![
        format!("Name: {}", compound.name),
        format!("Formula: {}", compound.formula),
        format!("Uses: {}", compound.uses),
        format!("Properties: {}", compound.properties),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // All orderings of a small symbol set (Heap's algorithm).
    fn permutations(symbols: &[&'static str]) -> Vec<Vec<&'static str>> {
        fn go(k: usize, v: &mut Vec<&'static str>, out: &mut Vec<Vec<&'static str>>) {
            if k <= 1 {
                out.push(v.clone());
                return;
            }
            for i in 0..k {
                go(k - 1, v, out);
                if k % 2 == 0 {
                    v.swap(i, k - 1);
                } else {
                    v.swap(0, k - 1);
                }
            }
        }
        let mut v = symbols.to_vec();
        let mut out = Vec::new();
        let len = v.len();
        go(len, &mut v, &mut out);
        out
    }

    #[test]
    fn test_order_independence() {
        // Exhaustive permutations for every compound small enough
        for compound in COMPOUNDS.iter().filter(|c| c.elements.len() <= 5) {
            for perm in permutations(compound.elements) {
                let hit = find_match(&perm).expect(compound.formula);
                // Shared-multiset formulas resolve to the first declared,
                // but the multiset itself must always agree
                let mut got = hit.elements.to_vec();
                let mut want = compound.elements.to_vec();
                got.sort_unstable();
                want.sort_unstable();
                assert_eq!(got, want, "wrong multiset for {}", compound.formula);
            }
        }
    }

    #[test]
    fn test_water() {
        for perm in permutations(&["H", "O", "H"]) {
            let hit = find_match(&perm).unwrap();
            assert_eq!(hit.formula, "H2O");
            assert_eq!(hit.name, "Water");
        }

        // Missing one H is not water, nor anything else
        assert!(find_match(&["H", "O"]).is_none());
    }

    #[test]
    fn test_salt() {
        let hit = find_match(&["Na", "Cl"]).unwrap();
        assert_eq!(hit.name, "Sodium Chloride");

        // An extra atom of any element fails the match
        assert!(find_match(&["Cl", "Na", "Na"]).is_none());
        assert!(find_match(&["Na", "Cl", "H"]).is_none());
    }

    #[test]
    fn test_declaration_order_tie_break() {
        // Glucose, Ethanol and Sucrose all reduce to {C, H, O};
        // the first declared wins
        for perm in permutations(&["C", "H", "O"]) {
            let hit = find_match(&perm).unwrap();
            assert_eq!(hit.formula, "C6H12O6");
            assert_eq!(hit.name, "Glucose");
        }
    }

    #[test]
    fn test_large_compound_rotations() {
        // Hexane is too big for exhaustive permutations; rotations and
        // the reversal cover the ordering axis
        let base = COMPOUNDS.iter().find(|c| c.formula == "C6H14").unwrap();
        let mut seq = base.elements.to_vec();
        for _ in 0..seq.len() {
            seq.rotate_left(1);
            assert_eq!(find_match(&seq).unwrap().formula, "C6H14");
        }
        seq.reverse();
        assert_eq!(find_match(&seq).unwrap().formula, "C6H14");

        // Dropping one H misses
        let short = &seq[..seq.len() - 1];
        assert!(find_match(short).is_none());
    }

    #[test]
    fn test_empty_and_unknown() {
        assert!(find_match(&[]).is_none());
        assert!(find_match(&["He"]).is_none());
        assert!(find_match(&["Xx", "Yy"]).is_none());
    }

    #[test]
    fn test_info_lines() {
        let lines = info_lines(find_match(&["Cl", "H"]).unwrap());
        assert_eq!(lines[0], "Name: Hydrochloric Acid");
        assert_eq!(lines[1], "Formula: HCl");
    }
}
