// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.


use pressrun::RawOrderInput;
use pressrun_domain::{PriceCell, PricingMatrix, PrintModeCosts, QuantityDiscountTable};
use pressrun_persistence::{ConfigStore, MatrixRepository};
use std::collections::BTreeMap;

/// Builds the matrix used across handler tests: one paper, one binding,
/// both print modes priced at weight 70.
fn a5_matrix() -> PricingMatrix {
    let mut matrix: PricingMatrix = PricingMatrix::new("A5");
    let mut weights: BTreeMap<String, PrintModeCosts> = BTreeMap::new();
    weights.insert(
        "70".to_string(),
        PrintModeCosts {
            bw: PriceCell::Priced(380),
            color: PriceCell::Priced(980),
        },
    );
    matrix.page_costs.insert("تحریر".to_string(), weights);
    matrix.binding_costs.insert("شومیز".to_string(), 3000);
    matrix.cover_cost = 8000;
    matrix.cover_weights = vec!["250".to_string(), "300".to_string()];
    matrix.profit_margin = 0.1;
    matrix
}

/// Builds a repository with the A5 matrix, a catalogue entry for it, and
/// the standard 50/100 discount table.
fn seeded_repository() -> MatrixRepository {
    let mut repo: MatrixRepository =
        MatrixRepository::new(ConfigStore::new_in_memory().unwrap());
    repo.save_matrix("A5", &a5_matrix()).unwrap();
    repo.store().set_book_sizes(&["A5".to_string()]).unwrap();

    let mut discounts: QuantityDiscountTable = QuantityDiscountTable::new();
    discounts.set_threshold(50, 5.0);
    discounts.set_threshold(100, 10.0);
    repo.store().set_quantity_discounts(&discounts).unwrap();
    repo
}

/// Raw input for the reference order: 100 black-and-white pages, 60 books.
fn reference_input() -> RawOrderInput {
    RawOrderInput {
        book_size: Some("A5".to_string()),
        paper_type: Some("تحریر".to_string()),
        paper_weight: Some("70".to_string()),
        print_type: Some("bw".to_string()),
        page_count_bw: Some(100),
        quantity: Some(60),
        binding_type: Some("شومیز".to_string()),
        ..RawOrderInput::default()
    }
}
