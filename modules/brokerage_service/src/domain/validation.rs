//! Input validation for brokerage writes
//!
//! Text limits are declared on the input types and mirror the column sizes
//! created by the migrations. Decimal precision and lease dates are checked here.

use crate::contract::{
    AgentPatch, BrokerageError, ClientPatch, NewAgent, NewClient, NewOwner, NewProperty,
    NewRentalContract, NewSaleContract, OwnerPatch, PropertyPatch, RentalContractPatch,
    SaleContractPatch,
};
use rust_decimal::Decimal;
use validator::{Validate, ValidationError};

/// Decimal column shape: total significant digits and digits after the point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalShape {
    pub max_digits: u32,
    pub decimal_places: u32,
}

pub const PRICE: DecimalShape = DecimalShape {
    max_digits: 15,
    decimal_places: 2,
};
pub const AMOUNT: DecimalShape = DecimalShape {
    max_digits: 10,
    decimal_places: 2,
};
pub const PERCENT: DecimalShape = DecimalShape {
    max_digits: 5,
    decimal_places: 2,
};

/// Run the declared field rules; the first failing field (by name) is reported
pub fn validate_fields(input: &impl Validate) -> Result<(), BrokerageError> {
    let Err(errors) = input.validate() else {
        return Ok(());
    };

    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    match fields.first() {
        Some(&(field, field_errors)) => {
            let message = field_errors
                .iter()
                .map(describe)
                .collect::<Vec<_>>()
                .join("; ");
            Err(BrokerageError::validation(field, message))
        }
        None => Err(BrokerageError::validation("input", errors.to_string())),
    }
}

fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    match &*error.code {
        "blank" => "must not be blank".to_string(),
        "email" => "is not a valid email address".to_string(),
        "range" => "must not be negative".to_string(),
        "length" => match (error.params.get("min"), error.params.get("max")) {
            (Some(min), Some(max)) => format!("length must be between {} and {}", min, max),
            (None, Some(max)) => format!("length must be at most {}", max),
            _ => "has an invalid length".to_string(),
        },
        code => code.to_string(),
    }
}

/// Validate that a non-negative decimal fits the column's precision and scale
pub fn validate_decimal(
    field: &'static str,
    value: Decimal,
    shape: DecimalShape,
) -> Result<(), BrokerageError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(BrokerageError::validation(field, "must not be negative"));
    }

    let normalized = value.normalize();
    if normalized.scale() > shape.decimal_places {
        return Err(BrokerageError::validation(
            field,
            format!(
                "{} has more than {} decimal places",
                value, shape.decimal_places
            ),
        ));
    }

    let integer_part = normalized.trunc().normalize().mantissa().unsigned_abs();
    let integer_digits = if integer_part == 0 {
        0
    } else {
        integer_part.to_string().len() as u32
    };
    let max_integer_digits = shape.max_digits - shape.decimal_places;
    if integer_digits > max_integer_digits {
        return Err(BrokerageError::validation(
            field,
            format!(
                "{} has more than {} digits before the decimal point",
                value, max_integer_digits
            ),
        ));
    }

    Ok(())
}

fn validate_opt<T: Copy>(
    value: Option<T>,
    check: impl FnOnce(T) -> Result<(), BrokerageError>,
) -> Result<(), BrokerageError> {
    match value {
        Some(v) => check(v),
        None => Ok(()),
    }
}

// ===== Owner =====

pub fn validate_new_owner(input: &NewOwner) -> Result<(), BrokerageError> {
    validate_fields(input)
}

pub fn validate_owner_patch(patch: &OwnerPatch) -> Result<(), BrokerageError> {
    validate_fields(patch)
}

// ===== Client =====

pub fn validate_new_client(input: &NewClient) -> Result<(), BrokerageError> {
    validate_fields(input)?;
    validate_decimal("max_budget", input.max_budget, PRICE)
}

pub fn validate_client_patch(patch: &ClientPatch) -> Result<(), BrokerageError> {
    validate_fields(patch)?;
    validate_opt(patch.max_budget, |v| validate_decimal("max_budget", v, PRICE))
}

// ===== Agent =====

pub fn validate_new_agent(input: &NewAgent) -> Result<(), BrokerageError> {
    validate_fields(input)?;
    validate_decimal("salary", input.salary, AMOUNT)?;
    validate_decimal("commission_pct", input.commission_pct, PERCENT)
}

pub fn validate_agent_patch(patch: &AgentPatch) -> Result<(), BrokerageError> {
    validate_fields(patch)?;
    validate_opt(patch.salary, |v| validate_decimal("salary", v, AMOUNT))?;
    validate_opt(patch.commission_pct, |v| {
        validate_decimal("commission_pct", v, PERCENT)
    })
}

// ===== Property =====

pub fn validate_new_property(input: &NewProperty) -> Result<(), BrokerageError> {
    validate_fields(input)?;
    validate_decimal("surface_m2", input.surface_m2, AMOUNT)?;
    validate_opt(input.sale_price, |v| validate_decimal("sale_price", v, PRICE))?;
    validate_opt(input.rental_price, |v| validate_decimal("rental_price", v, PRICE))
}

pub fn validate_property_patch(patch: &PropertyPatch) -> Result<(), BrokerageError> {
    validate_fields(patch)?;
    validate_opt(patch.surface_m2, |v| validate_decimal("surface_m2", v, AMOUNT))?;
    validate_opt(patch.sale_price.flatten(), |v| {
        validate_decimal("sale_price", v, PRICE)
    })?;
    validate_opt(patch.rental_price.flatten(), |v| {
        validate_decimal("rental_price", v, PRICE)
    })
}

// ===== Contracts =====

pub fn validate_new_sale_contract(input: &NewSaleContract) -> Result<(), BrokerageError> {
    validate_fields(input)?;
    validate_decimal("final_price", input.final_price, PRICE)?;
    validate_decimal("agent_commission", input.agent_commission, AMOUNT)
}

pub fn validate_sale_contract_patch(patch: &SaleContractPatch) -> Result<(), BrokerageError> {
    validate_fields(patch)?;
    validate_opt(patch.final_price, |v| validate_decimal("final_price", v, PRICE))?;
    validate_opt(patch.agent_commission, |v| {
        validate_decimal("agent_commission", v, AMOUNT)
    })
}

pub fn validate_new_rental_contract(input: &NewRentalContract) -> Result<(), BrokerageError> {
    if input.end_date < input.start_date {
        return Err(BrokerageError::validation(
            "end_date",
            format!(
                "end date {} is before start date {}",
                input.end_date, input.start_date
            ),
        ));
    }
    validate_fields(input)?;
    validate_decimal("monthly_rent", input.monthly_rent, AMOUNT)?;
    validate_decimal("security_deposit", input.security_deposit, AMOUNT)
}

pub fn validate_rental_contract_patch(
    patch: &RentalContractPatch,
) -> Result<(), BrokerageError> {
    if let (Some(start), Some(end)) = (patch.start_date, patch.end_date) {
        if end < start {
            return Err(BrokerageError::validation(
                "end_date",
                format!("end date {} is before start date {}", end, start),
            ));
        }
    }
    validate_fields(patch)?;
    validate_opt(patch.monthly_rent, |v| validate_decimal("monthly_rent", v, AMOUNT))?;
    validate_opt(patch.security_deposit, |v| {
        validate_decimal("security_deposit", v, AMOUNT)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn owner() -> NewOwner {
        NewOwner {
            name: "Ana".to_string(),
            surname: "Perez".to_string(),
            national_id: "12345678Z".to_string(),
            phone: "+34 600 000 000".to_string(),
            email: "ana.perez@example.com".to_string(),
            address: "Calle Luna 4".to_string(),
        }
    }

    #[test]
    fn text_rejects_blank_and_overlong() {
        assert!(validate_new_owner(&owner()).is_ok());

        let mut blank = owner();
        blank.name = "   ".to_string();
        match validate_new_owner(&blank) {
            Err(BrokerageError::Validation { field, message }) => {
                assert_eq!(field, "name");
                assert!(message.contains("blank"), "{message}");
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let mut long = owner();
        long.national_id = "x".repeat(21);
        assert!(matches!(
            validate_new_owner(&long),
            Err(BrokerageError::Validation { field: "national_id", .. })
        ));

        let mut exact = owner();
        exact.national_id = "x".repeat(20);
        assert!(validate_new_owner(&exact).is_ok());
    }

    #[test]
    fn email_shapes() {
        for bad in ["ana", "@example.com", "ana@", "ana perez@example.com"] {
            let mut input = owner();
            input.email = bad.to_string();
            assert!(
                matches!(
                    validate_new_owner(&input),
                    Err(BrokerageError::Validation { field: "email", .. })
                ),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn first_failing_field_is_reported_by_name() {
        let mut input = owner();
        input.surname = String::new();
        input.address = String::new();
        assert!(matches!(
            validate_new_owner(&input),
            Err(BrokerageError::Validation { field: "address", .. })
        ));
    }

    #[test]
    fn decimal_precision_and_scale() {
        assert!(validate_decimal("price", dec!(9999999999999.99), PRICE).is_ok());
        assert!(validate_decimal("price", dec!(10000000000000.00), PRICE).is_err());
        assert!(validate_decimal("price", dec!(0), PRICE).is_ok());
        assert!(validate_decimal("price", dec!(12.345), PRICE).is_err());
        // Trailing zeros do not count against the scale
        assert!(validate_decimal("price", dec!(12.3400), PRICE).is_ok());
        assert!(validate_decimal("pct", dec!(100.00), PERCENT).is_ok());
        assert!(validate_decimal("pct", dec!(1000), PERCENT).is_err());
        assert!(validate_decimal("salary", dec!(-1), AMOUNT).is_err());
    }

    #[test]
    fn counts_must_not_be_negative() {
        let patch = PropertyPatch {
            rooms: Some(-1),
            ..Default::default()
        };
        assert!(matches!(
            validate_property_patch(&patch),
            Err(BrokerageError::Validation { field: "rooms", .. })
        ));

        let patch = PropertyPatch {
            bathrooms: Some(0),
            ..Default::default()
        };
        assert!(validate_property_patch(&patch).is_ok());
    }

    #[test]
    fn rental_dates_must_be_ordered() {
        let start = chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let end = chrono::NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let patch = RentalContractPatch {
            start_date: Some(start),
            end_date: Some(end),
            ..Default::default()
        };
        assert!(matches!(
            validate_rental_contract_patch(&patch),
            Err(BrokerageError::Validation { field: "end_date", .. })
        ));
    }

    #[test]
    fn patches_only_check_present_fields() {
        assert!(validate_owner_patch(&OwnerPatch::default()).is_ok());
        let patch = OwnerPatch {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert!(validate_owner_patch(&patch).is_err());
    }
}
