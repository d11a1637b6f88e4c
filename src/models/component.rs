//! Payment template component model.
//!
//! A [`PaymentTemplateComponent`] is one calculated earning or statutory line
//! of a payment template, ready to be upserted by the persistence layer.

use serde::{Deserialize, Serialize};

use super::Amount;

/// The kind of record a component points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// A configured payment field.
    PaymentField,
    /// Employee Provident Fund.
    Epf,
    /// Employee State Insurance.
    Esi,
    /// Professional Tax.
    Pt,
    /// Labour Welfare Fund.
    Lwf,
    /// Statutory Bonus.
    Bonus,
}

/// The target of a component together with its foreign key.
///
/// Serialized flat into the component as `target_type` plus the matching
/// `*_id` column.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ComponentTarget;
///
/// let target = ComponentTarget::Epf { epf_id: "epf_001".to_string() };
/// let json = serde_json::to_value(&target).unwrap();
/// assert_eq!(json["target_type"], "epf");
/// assert_eq!(json["epf_id"], "epf_001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "target_type", rename_all = "snake_case")]
pub enum ComponentTarget {
    /// A payment field.
    PaymentField {
        /// The referenced payment field.
        payment_field_id: String,
    },
    /// An EPF scheme.
    Epf {
        /// The referenced EPF scheme.
        epf_id: String,
    },
    /// An ESI scheme.
    Esi {
        /// The referenced ESI scheme.
        esi_id: String,
    },
    /// A professional tax scheme.
    Pt {
        /// The referenced professional tax scheme.
        pt_id: String,
    },
    /// A labour welfare fund scheme.
    Lwf {
        /// The referenced labour welfare fund scheme.
        lwf_id: String,
    },
    /// A statutory bonus scheme.
    Bonus {
        /// The referenced statutory bonus scheme.
        bonus_id: String,
    },
}

impl ComponentTarget {
    /// Returns the target type tag.
    pub fn target_type(&self) -> TargetType {
        match self {
            ComponentTarget::PaymentField { .. } => TargetType::PaymentField,
            ComponentTarget::Epf { .. } => TargetType::Epf,
            ComponentTarget::Esi { .. } => TargetType::Esi,
            ComponentTarget::Pt { .. } => TargetType::Pt,
            ComponentTarget::Lwf { .. } => TargetType::Lwf,
            ComponentTarget::Bonus { .. } => TargetType::Bonus,
        }
    }

    /// Returns the foreign key of the referenced record.
    pub fn target_id(&self) -> &str {
        match self {
            ComponentTarget::PaymentField { payment_field_id } => payment_field_id,
            ComponentTarget::Epf { epf_id } => epf_id,
            ComponentTarget::Esi { esi_id } => esi_id,
            ComponentTarget::Pt { pt_id } => pt_id,
            ComponentTarget::Lwf { lwf_id } => lwf_id,
            ComponentTarget::Bonus { bonus_id } => bonus_id,
        }
    }
}

/// Whether a component is an earning or a statutory contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// Part of the employee's earnings.
    Earning,
    /// A statutory contribution or deduction.
    StatutoryContribution,
}

impl ComponentType {
    /// All component types, in display order.
    pub const ALL: [ComponentType; 2] = [ComponentType::Earning, ComponentType::StatutoryContribution];
}

impl Default for ComponentType {
    fn default() -> Self {
        Self::ALL[0]
    }
}

/// One calculated line of a payment template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTemplateComponent {
    /// Identifier of the persisted row, when updating an existing component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The payment template this component belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// What this component points at.
    #[serde(flatten)]
    pub target: ComponentTarget,
    /// Earning or statutory contribution.
    #[serde(default)]
    pub component_type: ComponentType,
    /// The calculated monthly value.
    #[serde(default)]
    pub calculation_value: Option<Amount>,
}

impl PaymentTemplateComponent {
    /// Returns the target type tag.
    pub fn target_type(&self) -> TargetType {
        self.target.target_type()
    }
}

/// Previously stored components whose identity a recalculation carries over.
///
/// The prioritized component (typically the one submitted with the current
/// edit) wins over the existing component loaded from storage, field by field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentContext<'a> {
    /// The component that takes precedence.
    pub prioritized: Option<&'a PaymentTemplateComponent>,
    /// The stored component used when the prioritized one lacks a value.
    pub existing: Option<&'a PaymentTemplateComponent>,
}

impl<'a> ComponentContext<'a> {
    /// Creates a context from optional prioritized and existing components.
    pub fn new(
        prioritized: Option<&'a PaymentTemplateComponent>,
        existing: Option<&'a PaymentTemplateComponent>,
    ) -> Self {
        Self {
            prioritized,
            existing,
        }
    }

    /// A context with nothing to carry over.
    pub fn empty() -> Self {
        Self::default()
    }

    fn pick<T>(&self, f: impl Fn(&'a PaymentTemplateComponent) -> Option<T>) -> Option<T> {
        self.prioritized.and_then(&f).or_else(|| self.existing.and_then(&f))
    }

    /// The carried-over row id.
    pub fn id(&self) -> Option<String> {
        self.pick(|c| c.id.clone())
    }

    /// The carried-over template id.
    pub fn template_id(&self) -> Option<String> {
        self.pick(|c| c.template_id.clone())
    }

    /// The carried-over component type.
    pub fn component_type(&self) -> Option<ComponentType> {
        self.pick(|c| Some(c.component_type))
    }

    /// The stored calculation value.
    pub fn stored_value(&self) -> Option<Amount> {
        self.pick(|c| c.calculation_value)
    }

    /// Builds a component for `target`, carrying over identity.
    pub fn component(
        &self,
        target: ComponentTarget,
        component_type: ComponentType,
        calculation_value: Option<Amount>,
    ) -> PaymentTemplateComponent {
        PaymentTemplateComponent {
            id: self.id(),
            template_id: self.template_id(),
            target,
            component_type,
            calculation_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn stored(id: Option<&str>, template_id: Option<&str>, value: Option<i64>) -> PaymentTemplateComponent {
        PaymentTemplateComponent {
            id: id.map(str::to_string),
            template_id: template_id.map(str::to_string),
            target: ComponentTarget::Pt {
                pt_id: "pt_001".to_string(),
            },
            component_type: ComponentType::StatutoryContribution,
            calculation_value: value.map(|v| Amount::new(Decimal::from(v))),
        }
    }

    #[test]
    fn test_component_serializes_flat_target() {
        let component = PaymentTemplateComponent {
            id: Some("comp_001".to_string()),
            template_id: Some("tpl_001".to_string()),
            target: ComponentTarget::PaymentField {
                payment_field_id: "pf_basic".to_string(),
            },
            component_type: ComponentType::Earning,
            calculation_value: Some(Amount::new(Decimal::from(500))),
        };

        let json = serde_json::to_value(&component).unwrap();
        assert_eq!(json["target_type"], "payment_field");
        assert_eq!(json["payment_field_id"], "pf_basic");
        assert_eq!(json["component_type"], "earning");
        assert_eq!(json["calculation_value"], "500.00");
    }

    #[test]
    fn test_component_deserializes_from_stored_row() {
        let json = r#"{
            "id": "comp_002",
            "template_id": "tpl_001",
            "target_type": "lwf",
            "lwf_id": "lwf_001",
            "component_type": "statutory_contribution",
            "calculation_value": "25"
        }"#;

        let component: PaymentTemplateComponent = serde_json::from_str(json).unwrap();
        assert_eq!(component.target_type(), TargetType::Lwf);
        assert_eq!(component.target.target_id(), "lwf_001");
        assert_eq!(component.calculation_value.unwrap().to_string(), "25.00");
    }

    #[test]
    fn test_default_component_type_is_first_in_list() {
        assert_eq!(ComponentType::default(), ComponentType::Earning);
        assert_eq!(ComponentType::default(), ComponentType::ALL[0]);
    }

    #[test]
    fn test_prioritized_component_wins() {
        let prioritized = stored(Some("comp_new"), None, Some(200));
        let existing = stored(Some("comp_old"), Some("tpl_001"), Some(100));
        let context = ComponentContext::new(Some(&prioritized), Some(&existing));

        assert_eq!(context.id().as_deref(), Some("comp_new"));
        assert_eq!(context.template_id().as_deref(), Some("tpl_001"));
        assert_eq!(context.stored_value().unwrap().to_string(), "200.00");
    }

    #[test]
    fn test_existing_component_used_when_prioritized_lacks_value() {
        let prioritized = stored(None, None, None);
        let existing = stored(Some("comp_old"), Some("tpl_001"), Some(100));
        let context = ComponentContext::new(Some(&prioritized), Some(&existing));

        assert_eq!(context.id().as_deref(), Some("comp_old"));
        assert_eq!(context.stored_value().unwrap().to_string(), "100.00");
    }

    #[test]
    fn test_empty_context_carries_nothing() {
        let context = ComponentContext::empty();
        assert_eq!(context.id(), None);
        assert_eq!(context.template_id(), None);
        assert_eq!(context.component_type(), None);
        assert_eq!(context.stored_value(), None);
    }
}
