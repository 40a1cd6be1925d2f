// 💳 Subscription Plans
// Plan-tier gating is injected policy: the assembler only ever receives the
// remaining capacity derived here, never the plan itself. Billing and
// payment-processor interaction live entirely outside this crate.

use serde::{Deserialize, Serialize};

/// A subscription tier. `transaction_limit` is `None` for unlimited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub currency: String,
    pub features: Vec<String>,
    pub transaction_limit: Option<usize>,
    pub recommended: bool,
}

impl SubscriptionPlan {
    /// How many more transactions fit under this plan, given the current
    /// count. `None` = unlimited.
    pub fn remaining_capacity(&self, current_count: usize) -> Option<usize> {
        self.transaction_limit
            .map(|limit| limit.saturating_sub(current_count))
    }
}

/// Registry of known plans. In-memory catalog; the default set matches the
/// three tiers the product ships with.
pub struct PlanRegistry {
    plans: Vec<SubscriptionPlan>,
}

impl PlanRegistry {
    pub fn new() -> Self {
        PlanRegistry { plans: Vec::new() }
    }

    /// The three product tiers: Básico (10 tx, free), Medio (100 tx),
    /// Premium (unlimited).
    pub fn with_defaults() -> Self {
        PlanRegistry {
            plans: vec![
                SubscriptionPlan {
                    id: "basic".to_string(),
                    name: "Básico".to_string(),
                    price: 0.0,
                    currency: "EUR".to_string(),
                    features: vec![
                        "Hasta 10 transacciones por mes".to_string(),
                        "Extracción básica de datos".to_string(),
                        "Exportación a CSV".to_string(),
                    ],
                    transaction_limit: Some(10),
                    recommended: false,
                },
                SubscriptionPlan {
                    id: "medium".to_string(),
                    name: "Medio".to_string(),
                    price: 25.0,
                    currency: "EUR".to_string(),
                    features: vec![
                        "Hasta 100 transacciones por mes".to_string(),
                        "Extracción avanzada de datos".to_string(),
                        "Detección automática de clientes".to_string(),
                    ],
                    transaction_limit: Some(100),
                    recommended: true,
                },
                SubscriptionPlan {
                    id: "premium".to_string(),
                    name: "Premium".to_string(),
                    price: 50.0,
                    currency: "EUR".to_string(),
                    features: vec![
                        "Transacciones ilimitadas".to_string(),
                        "Exportación a múltiples formatos".to_string(),
                        "Asistente contable personalizado".to_string(),
                    ],
                    transaction_limit: None,
                    recommended: false,
                },
            ],
        }
    }

    pub fn register(&mut self, plan: SubscriptionPlan) {
        self.plans.push(plan);
    }

    pub fn find(&self, id: &str) -> Option<&SubscriptionPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn all(&self) -> &[SubscriptionPlan] {
        &self.plans
    }
}

impl Default for PlanRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
