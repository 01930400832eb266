//! Input validation
//!
//! Optional checks for callers (the CLI, the table loader) before quoting.
//! `compute_cost` never calls these and never fails on bad data.

use shared::models::{OrderLineItem, PricingTables, PrintDesign};
use shared::quote::QuoteRequest;
use shared::{QuoteError, QuoteResult};

/// Maximum allowed price or table amount (¥10,000,000)
const MAX_AMOUNT: f64 = 10_000_000.0;
/// Maximum allowed quantity per line
const MAX_QUANTITY: u32 = 9999;
/// Maximum colors per design
const MAX_COLORS: u32 = 12;

/// Money value must be finite, non-negative and bounded
fn require_amount(value: f64, field: &str) -> QuoteResult<()> {
    if !value.is_finite() {
        return Err(QuoteError::amount(field, format!("must be a finite number, got {}", value)));
    }
    if value < 0.0 {
        return Err(QuoteError::amount(field, format!("must be non-negative, got {}", value)));
    }
    if value > MAX_AMOUNT {
        return Err(QuoteError::amount(
            field,
            format!("exceeds maximum allowed ({}), got {}", MAX_AMOUNT, value),
        ));
    }
    Ok(())
}

/// Validate order lines
pub fn validate_order_lines(lines: &[OrderLineItem]) -> QuoteResult<()> {
    for (i, line) in lines.iter().enumerate() {
        require_amount(line.unit_price, &format!("order_lines[{}].unit_price", i))?;
        if line.quantity > MAX_QUANTITY {
            return Err(QuoteError::quantity(
                format!("order_lines[{}].quantity", i),
                format!("exceeds maximum allowed ({}), got {}", MAX_QUANTITY, line.quantity),
            ));
        }
        if line.category_id.trim().is_empty() {
            return Err(QuoteError::MissingField(format!(
                "order_lines[{}].category_id",
                i
            )));
        }
    }
    Ok(())
}

/// Validate print designs
pub fn validate_print_designs(designs: &[PrintDesign]) -> QuoteResult<()> {
    let mut seen = std::collections::BTreeSet::new();
    for design in designs {
        if design.id.trim().is_empty() {
            return Err(QuoteError::InvalidDesign {
                design_id: design.id.clone(),
                reason: "design id is required".to_string(),
            });
        }
        if !seen.insert(design.id.as_str()) {
            return Err(QuoteError::InvalidDesign {
                design_id: design.id.clone(),
                reason: "duplicate design id".to_string(),
            });
        }
        if design.color_count > MAX_COLORS {
            return Err(QuoteError::InvalidDesign {
                design_id: design.id.clone(),
                reason: format!("color count exceeds maximum ({}), got {}", MAX_COLORS, design.color_count),
            });
        }
    }
    Ok(())
}

/// Validate pricing tables: amounts, rates and tier ordering
pub fn validate_pricing_tables(tables: &PricingTables) -> QuoteResult<()> {
    let mut previous_max: Option<u32> = None;
    for (i, tier) in tables.tiers.iter().enumerate() {
        if tier.min > tier.max {
            return Err(QuoteError::InvalidTier(format!(
                "tier {} has min {} greater than max {}",
                i, tier.min, tier.max
            )));
        }
        if let Some(prev) = previous_max
            && tier.min <= prev
        {
            return Err(QuoteError::InvalidTier(format!(
                "tier {} starts at {} but previous tier ends at {}",
                i, tier.min, prev
            )));
        }
        require_amount(tier.first_color_price, &format!("tiers[{}].first_color_price", i))?;
        require_amount(
            tier.additional_color_price,
            &format!("tiers[{}].additional_color_price", i),
        )?;
        previous_max = Some(tier.max);
    }

    for plate in &tables.plate_costs {
        let key = format!("plate_costs[{}/{}]", plate.size, plate.plate_type);
        require_amount(plate.cost, &format!("{}.cost", key))?;
        require_amount(plate.surcharge_per_color, &format!("{}.surcharge_per_color", key))?;
    }

    for (ink, cost) in &tables.special_ink_costs {
        require_amount(*cost, &format!("special_ink_costs[{}]", ink))?;
    }
    for (size, cost) in &tables.size_surcharges {
        require_amount(*cost, &format!("size_surcharges[{}]", size))?;
    }
    for (location, cost) in &tables.location_surcharges {
        require_amount(*cost, &format!("location_surcharges[{}]", location))?;
    }
    for (tag, cost) in &tables.tag_surcharges {
        require_amount(*cost, &format!("tag_surcharges[{}]", tag))?;
    }
    for (region, zone) in &tables.shipping_zones {
        require_amount(zone.cost, &format!("shipping_zones[{}].cost", region))?;
    }
    require_amount(tables.free_shipping_threshold, "free_shipping_threshold")?;

    for (field, value) in std::iter::once(("bring_in_fee_rate".to_string(), tables.bring_in_fee_rate))
        .chain(
            tables
                .brand_rates
                .iter()
                .map(|(brand, rate)| (format!("brand_rates[{}]", brand), *rate)),
        )
    {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(QuoteError::InvalidRate { field, value });
        }
    }

    Ok(())
}

/// Validate a whole request
pub fn validate_request(request: &QuoteRequest) -> QuoteResult<()> {
    validate_order_lines(&request.order_lines)?;
    validate_print_designs(&request.print_designs)?;
    validate_pricing_tables(&request.pricing)?;
    if let Some(q) = request.options.mode.override_quantity()
        && q > MAX_QUANTITY
    {
        return Err(QuoteError::quantity(
            "options.mode.override_quantity",
            format!("exceeds maximum allowed ({}), got {}", MAX_QUANTITY, q),
        ));
    }
    Ok(())
}
