use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::requirements::Requirements;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractKind {
    Explore,
    Rescue,
    Delivery,
    Kill,
}

/// What a completed contract pays out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewards {
    #[serde(default)]
    pub prestige: u8,
    #[serde(default)]
    pub credits: u8,
    #[serde(default)]
    pub cards: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ContractKind,
    #[serde(default)]
    pub rewards: Rewards,
    pub requirements: Requirements,
    #[serde(default)]
    pub hazard_dice: u8,
}

/// Loaded contract catalog: keeps data-file order and a case-sensitive name
/// lookup.
#[derive(Debug, Default)]
pub struct ContractsDb {
    contracts: Vec<Contract>,
    name_to_idx: HashMap<String, usize>,
}

impl ContractsDb {
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Contract> {
        self.name_to_idx.get(name).map(|&i| &self.contracts[i])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Contract> {
        self.contracts.iter()
    }

    /// Contracts with at most `dice` hazard dice, in catalog order. This is
    /// the offer pool used by the simulator.
    pub fn max_hazard(&self, dice: u8) -> Vec<&Contract> {
        self.contracts
            .iter()
            .filter(|c| c.hazard_dice <= dice)
            .collect()
    }
}

fn validate_contract(contract: &Contract) -> Result<(), String> {
    if contract.requirements.is_empty() {
        return Err(format!("Contract '{}' has no requirements", contract.name));
    }
    Ok(())
}

/// Load contracts from a JSON file (runtime), validating entries and
/// building the name lookup.
pub fn load_contracts_from_json<P: AsRef<Path>>(path: P) -> Result<ContractsDb, String> {
    let data = fs::read_to_string(path.as_ref()).map_err(|e| format!("Failed to read JSON: {e}"))?;
    let raw: Vec<Contract> =
        serde_json::from_str(&data).map_err(|e| format!("Failed to parse JSON: {e}"))?;

    if raw.is_empty() {
        return Err("No contracts in JSON".to_string());
    }

    let mut contracts: Vec<Contract> = Vec::with_capacity(raw.len());
    let mut name_to_idx: HashMap<String, usize> = HashMap::with_capacity(raw.len());

    for c in raw {
        validate_contract(&c)?;
        if let Some(prev) = name_to_idx.insert(c.name.clone(), contracts.len()) {
            return Err(format!(
                "Duplicate contract name '{}' (entries {} and {})",
                c.name,
                prev,
                contracts.len()
            ));
        }
        contracts.push(c);
    }

    Ok(ContractsDb {
        contracts,
        name_to_idx,
    })
}
