// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for pricing, options, and administration.

use pressrun::{
    AllowedOptions, CombinationReport, MAX_PAGE_COUNT, OrderParameters, PartialSelection,
    PriceCalculator, RawOrderInput, allowed_options as allowed_options_impl,
    validate_combination as validate_combination_impl,
};
use pressrun_domain::{
    HealthFinding, HealthStatus, PricingMatrix, QuantityDiscountTable, SizeAudit,
    evaluate_matrix_completeness, evaluate_matrix_coverage, evaluate_orderable_sizes,
    evaluate_orphaned_matrices, evaluate_sizes_defined, label_to_slug, overall_status,
};
use pressrun_persistence::MatrixRepository;
use tracing::info;

use crate::error::{ApiError, translate_persistence_error, translate_pricing_error};
use crate::request_response::{
    AllowedOptionsRequest, AllowedOptionsResponse, CalculatePriceResponse, DiscountsResponse,
    HealthCheckResponse, ListMatricesResponse, MatrixSummary, SaveMatrixRequest,
    SaveMatrixResponse, SetDiscountsRequest, SetDiscountsResponse,
};

/// Prices an order with the engine selected by the engine flag.
///
/// Raw input is sanitized first; the selected engine then validates and
/// prices the sanitized parameters.
///
/// # Errors
///
/// Returns an error if:
/// - The book size is missing or has no configuration for the selected engine
/// - The quantity is zero
/// - A page count exceeds [`MAX_PAGE_COUNT`]
/// - The engine rejects or cannot price the combination
/// - A storage read fails
pub fn calculate_price(
    repository: &mut MatrixRepository,
    raw: RawOrderInput,
) -> Result<CalculatePriceResponse, ApiError> {
    let params: OrderParameters = OrderParameters::from_raw(raw);

    if params.book_size.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("book_size"),
            message: String::from("A book size is required"),
        });
    }
    if params.quantity == 0 {
        return Err(ApiError::InvalidInput {
            field: String::from("quantity"),
            message: String::from("Quantity must be at least 1"),
        });
    }
    validate_page_counts(&params)?;

    let matrix_engine: bool = repository
        .store()
        .engine_v2_enabled()
        .map_err(translate_persistence_error)?;
    let discounts: QuantityDiscountTable = repository
        .store()
        .quantity_discounts()
        .map_err(translate_persistence_error)?;

    let response: CalculatePriceResponse = if matrix_engine {
        let matrix: PricingMatrix = repository
            .get_matrix(&params.book_size)
            .map_err(translate_persistence_error)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Book size"),
                message: format!(
                    "No pricing matrix is configured for book size '{}'",
                    params.book_size
                ),
            })?;
        let breakdown = PriceCalculator::Matrix(&matrix)
            .calculate(&discounts, &params)
            .map_err(translate_pricing_error)?;
        CalculatePriceResponse {
            engine: String::from("matrix"),
            breakdown,
        }
    } else {
        let rates = repository
            .store()
            .legacy_rates()
            .map_err(translate_persistence_error)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Legacy rates"),
                message: String::from("The legacy engine is selected but no rates are configured"),
            })?;
        let breakdown = PriceCalculator::Legacy(&rates)
            .calculate(&discounts, &params)
            .map_err(translate_pricing_error)?;
        CalculatePriceResponse {
            engine: String::from("legacy"),
            breakdown,
        }
    };

    info!(
        book_size = %params.book_size,
        quantity = params.quantity,
        engine = %response.engine,
        total = response.breakdown.total_price,
        "Priced order"
    );
    Ok(response)
}

/// Reports the options still selectable given a partial selection.
///
/// A size without a matrix is reported as unconfigured with an empty
/// option set rather than failing. A size whose matrix is incomplete gets
/// the same empty view: a partial option set would walk the user into a
/// combination the engine cannot price, so the form must not offer the
/// size at all until an administrator finishes it.
///
/// # Errors
///
/// Returns an error if the book size is missing or a storage read fails.
pub fn allowed_options(
    repository: &mut MatrixRepository,
    request: AllowedOptionsRequest,
) -> Result<AllowedOptionsResponse, ApiError> {
    if request.book_size.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("book_size"),
            message: String::from("A book size is required"),
        });
    }

    let matrix: Option<PricingMatrix> = repository
        .get_matrix(&request.book_size)
        .map_err(translate_persistence_error)?;

    let Some(matrix) = matrix else {
        return Ok(AllowedOptionsResponse {
            book_size: request.book_size,
            configured: false,
            orderable: false,
            options: AllowedOptions::empty(),
        });
    };
    if !matrix.is_complete() {
        return Ok(AllowedOptionsResponse {
            book_size: request.book_size,
            configured: true,
            orderable: false,
            options: AllowedOptions::empty(),
        });
    }

    let selection: PartialSelection = PartialSelection {
        paper_type: request.paper_type,
        paper_weight: request.paper_weight,
        binding_type: request.binding_type,
    };
    Ok(AllowedOptionsResponse {
        book_size: request.book_size,
        configured: true,
        orderable: true,
        options: allowed_options_impl(&matrix, &selection),
    })
}

/// Explains whether a full parameter set would be accepted.
///
/// # Errors
///
/// Returns an error if the book size is missing or unconfigured, a page
/// count exceeds [`MAX_PAGE_COUNT`], or a storage read fails.
pub fn validate_combination(
    repository: &mut MatrixRepository,
    raw: RawOrderInput,
) -> Result<CombinationReport, ApiError> {
    let params: OrderParameters = OrderParameters::from_raw(raw);

    if params.book_size.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("book_size"),
            message: String::from("A book size is required"),
        });
    }
    validate_page_counts(&params)?;

    let matrix: PricingMatrix = repository
        .get_matrix(&params.book_size)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Book size"),
            message: format!(
                "No pricing matrix is configured for book size '{}'",
                params.book_size
            ),
        })?;

    Ok(validate_combination_impl(&matrix, &params))
}

/// Audits the pricing configuration end to end.
///
/// Runs every check over the size catalogue and the stored matrices and
/// folds the findings into one overall status.
///
/// # Errors
///
/// Returns an error if a storage read fails.
pub fn run_health_check(
    repository: &mut MatrixRepository,
) -> Result<HealthCheckResponse, ApiError> {
    let sizes: Vec<String> = repository
        .store()
        .book_sizes()
        .map_err(translate_persistence_error)?;
    let matrices: Vec<(String, PricingMatrix)> = repository
        .all_matrices()
        .map_err(translate_persistence_error)?
        .iter()
        .map(|(size, matrix)| (size.clone(), matrix.clone()))
        .collect();

    let configured: Vec<String> = matrices.iter().map(|(size, _)| size.clone()).collect();
    let matrix_docs: Vec<PricingMatrix> =
        matrices.iter().map(|(_, matrix)| matrix.clone()).collect();

    let audits: Vec<SizeAudit> = matrices
        .iter()
        .map(|(size, matrix)| {
            let options = allowed_options_impl(matrix, &PartialSelection::default());
            SizeAudit {
                book_size: size.clone(),
                complete: matrix.is_complete(),
                allowed_paper_count: options.papers.len(),
                allowed_binding_count: options.bindings.len(),
            }
        })
        .collect();

    let findings: Vec<HealthFinding> = vec![
        evaluate_sizes_defined(&sizes),
        evaluate_matrix_coverage(&sizes, &configured),
        evaluate_matrix_completeness(&matrix_docs),
        evaluate_orphaned_matrices(&sizes, &configured),
        evaluate_orderable_sizes(&audits),
    ];
    let status: HealthStatus = overall_status(&findings);

    Ok(HealthCheckResponse {
        status,
        findings,
        sizes: audits,
    })
}

/// Stores the pricing matrix for a book size, replacing any prior version.
///
/// The document is validated before it is stored; a matrix that would
/// corrupt pricing is rejected outright.
///
/// # Errors
///
/// Returns an error if:
/// - The book size is missing
/// - A cost, margin, or extra-charge step is out of range
/// - The storage write fails
pub fn save_matrix(
    repository: &mut MatrixRepository,
    request: SaveMatrixRequest,
) -> Result<SaveMatrixResponse, ApiError> {
    if request.book_size.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("book_size"),
            message: String::from("A book size is required"),
        });
    }
    validate_matrix(&request.matrix)?;

    let mut matrix: PricingMatrix = request.matrix;
    matrix.book_size = request.book_size.clone();
    repository
        .save_matrix(&request.book_size, &matrix)
        .map_err(translate_persistence_error)?;

    info!(book_size = %request.book_size, "Stored pricing matrix");
    Ok(SaveMatrixResponse {
        book_size: request.book_size.clone(),
        message: format!("Pricing matrix for '{}' stored", request.book_size),
    })
}

/// Lists every configured matrix with a per-size summary.
///
/// # Errors
///
/// Returns an error if a storage read fails.
pub fn list_matrices(
    repository: &mut MatrixRepository,
) -> Result<ListMatricesResponse, ApiError> {
    let matrices: Vec<MatrixSummary> = repository
        .all_matrices()
        .map_err(translate_persistence_error)?
        .iter()
        .map(|(size, matrix)| MatrixSummary {
            book_size: size.clone(),
            slug: label_to_slug(size),
            status: matrix.status().as_str().to_string(),
            complete: matrix.is_complete(),
            paper_type_count: matrix.page_costs.len(),
            binding_type_count: matrix.binding_costs.len(),
        })
        .collect();

    Ok(ListMatricesResponse { matrices })
}

/// Fetches the quantity discount table.
///
/// # Errors
///
/// Returns an error if a storage read fails.
pub fn get_discounts(repository: &mut MatrixRepository) -> Result<DiscountsResponse, ApiError> {
    let thresholds: QuantityDiscountTable = repository
        .store()
        .quantity_discounts()
        .map_err(translate_persistence_error)?;
    Ok(DiscountsResponse { thresholds })
}

/// Replaces the quantity discount table.
///
/// # Errors
///
/// Returns an error if a percent is outside `0..=100` or the storage
/// write fails.
pub fn set_discounts(
    repository: &mut MatrixRepository,
    request: SetDiscountsRequest,
) -> Result<SetDiscountsResponse, ApiError> {
    for (quantity, percent) in request.thresholds.thresholds() {
        if !(0.0..=100.0).contains(percent) {
            return Err(ApiError::InvalidInput {
                field: String::from("thresholds"),
                message: format!(
                    "Discount percent {percent} for quantity {quantity} is outside 0..=100"
                ),
            });
        }
    }

    repository
        .store()
        .set_quantity_discounts(&request.thresholds)
        .map_err(translate_persistence_error)?;

    let threshold_count: usize = request.thresholds.thresholds().len();
    info!(threshold_count, "Stored quantity discount table");
    Ok(SetDiscountsResponse {
        threshold_count,
        message: String::from("Quantity discount table stored"),
    })
}

/// Rejects page counts above [`MAX_PAGE_COUNT`] before any arithmetic
/// runs on them.
fn validate_page_counts(params: &OrderParameters) -> Result<(), ApiError> {
    let lanes: [(&str, u32); 2] = [
        ("page_count_bw", params.page_count_bw),
        ("page_count_color", params.page_count_color),
    ];
    for (field, count) in lanes {
        if count > MAX_PAGE_COUNT {
            return Err(ApiError::InvalidInput {
                field: String::from(field),
                message: format!("Page count {count} exceeds the maximum of {MAX_PAGE_COUNT}"),
            });
        }
    }
    Ok(())
}

/// Rejects matrix documents with out-of-range costs before storage.
fn validate_matrix(matrix: &PricingMatrix) -> Result<(), ApiError> {
    if matrix.cover_cost < 0 {
        return Err(ApiError::InvalidInput {
            field: String::from("cover_cost"),
            message: format!("Cover cost {} must not be negative", matrix.cover_cost),
        });
    }
    for (binding, cost) in &matrix.binding_costs {
        if *cost < 0 {
            return Err(ApiError::InvalidInput {
                field: String::from("binding_costs"),
                message: format!("Binding '{binding}' has negative cost {cost}"),
            });
        }
    }
    for (name, extra) in &matrix.extras_costs {
        if extra.price < 0 {
            return Err(ApiError::InvalidInput {
                field: String::from("extras_costs"),
                message: format!("Extra '{name}' has negative price {}", extra.price),
            });
        }
    }
    if !(0.0..=10.0).contains(&matrix.profit_margin) {
        return Err(ApiError::InvalidInput {
            field: String::from("profit_margin"),
            message: format!(
                "Profit margin {} must be a fraction between 0 and 10",
                matrix.profit_margin
            ),
        });
    }
    Ok(())
}
