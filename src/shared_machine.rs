//! Cafetera compartida entre varios operadores.
//! Cada operacion toma el lock una sola vez, una venta nunca se ve a medias.
use std::sync::{Arc, Mutex};

use crate::{
    coffee_machine::{CoffeeMachine, Status},
    errors::CoffeeMachineError,
    recipe::Recipe,
};

#[derive(Clone)]
pub struct SharedCoffeeMachine {
    machine: Arc<Mutex<CoffeeMachine>>,
}

impl SharedCoffeeMachine {
    pub fn new(machine: CoffeeMachine) -> SharedCoffeeMachine {
        SharedCoffeeMachine {
            machine: Arc::new(Mutex::new(machine)),
        }
    }

    pub fn sell(&self, recipe: &Recipe) -> Result<(), CoffeeMachineError> {
        self.machine.lock()?.sell(recipe)
    }

    pub fn fill(
        &self,
        water: u64,
        milk: u64,
        coffee_beans: u64,
        disposable_cups: u64,
    ) -> Result<(), CoffeeMachineError> {
        self.machine.lock()?.fill(water, milk, coffee_beans, disposable_cups);
        Ok(())
    }

    pub fn take(&self) -> Result<u64, CoffeeMachineError> {
        Ok(self.machine.lock()?.take())
    }

    pub fn status(&self) -> Result<Status, CoffeeMachineError> {
        Ok(self.machine.lock()?.status())
    }
}
