//! Inventario y dinero de la cafetera. Vende bebidas, se recarga y se vacia.
use std::fmt;

use log::{debug, info};

use crate::{
    constants::{
        INITIAL_COFFEE_BEANS, INITIAL_DISPOSABLE_CUPS, INITIAL_MILK, INITIAL_MONEY, INITIAL_WATER,
    },
    errors::CoffeeMachineError,
    ingredients::IngredientQuantities,
    recipe::{Recipe, Resource},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoffeeMachine {
    stock: IngredientQuantities,
    disposable_cups: u64,
    money: u64,
}

/// Copia de solo lectura de los contadores, para imprimir los recursos restantes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub water: u64,
    pub milk: u64,
    pub coffee_beans: u64,
    pub disposable_cups: u64,
    pub money: u64,
}

impl CoffeeMachine {
    pub fn new(stock: IngredientQuantities, disposable_cups: u64, money: u64) -> CoffeeMachine {
        CoffeeMachine {
            stock,
            disposable_cups,
            money,
        }
    }

    /// Verifica agua, leche, granos y vasos en ese orden.
    /// No se modifica nada salvo que pasen todas las verificaciones.
    pub fn sell(&mut self, recipe: &Recipe) -> Result<(), CoffeeMachineError> {
        let shortage = self
            .stock
            .first_shortage(&recipe.required)
            .or_else(|| (self.disposable_cups < 1).then_some(Resource::DisposableCups));
        if let Some(resource) = shortage {
            info!("[MACHINE] Skipped {}, not enough {}", recipe.name, resource);
            return Err(CoffeeMachineError::NotEnough(resource));
        }

        self.stock.consume(&recipe.required);
        self.disposable_cups -= 1;
        self.money = self.money.saturating_add(recipe.price);
        debug!(
            "[MACHINE] Sold {} for ${}, remains {:?} and {} cups",
            recipe.name, recipe.price, self.stock, self.disposable_cups
        );
        Ok(())
    }

    pub fn fill(&mut self, water: u64, milk: u64, coffee_beans: u64, disposable_cups: u64) {
        self.stock.add(&IngredientQuantities::new(water, milk, coffee_beans));
        self.disposable_cups = self.disposable_cups.saturating_add(disposable_cups);
        debug!(
            "[MACHINE] Filled with {} ml of water, {} ml of milk, {} g of coffee beans and {} cups",
            water, milk, coffee_beans, disposable_cups
        );
    }

    /// Entrega todo el dinero, la cafetera queda sin nada
    pub fn take(&mut self) -> u64 {
        let taken = std::mem::take(&mut self.money);
        info!("[MACHINE] Took ${}", taken);
        taken
    }

    pub fn status(&self) -> Status {
        Status {
            water: self.stock.water,
            milk: self.stock.milk,
            coffee_beans: self.stock.coffee_beans,
            disposable_cups: self.disposable_cups,
            money: self.money,
        }
    }
}

impl Default for CoffeeMachine {
    fn default() -> Self {
        CoffeeMachine::new(
            IngredientQuantities::new(INITIAL_WATER, INITIAL_MILK, INITIAL_COFFEE_BEANS),
            INITIAL_DISPOSABLE_CUPS,
            INITIAL_MONEY,
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "The coffee machine has:")?;
        writeln!(f, "{} ml of water", self.water)?;
        writeln!(f, "{} ml of milk", self.milk)?;
        writeln!(f, "{} g of coffee beans", self.coffee_beans)?;
        writeln!(f, "{} disposable cups", self.disposable_cups)?;
        write!(f, "${} of money", self.money)
    }
}
