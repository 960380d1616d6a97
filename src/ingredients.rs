//! Cantidades de los ingredientes con los que se hace una bebida
use crate::recipe::Resource;

/// Agua y leche en ml, granos de cafe en g.
/// Se usa tanto para el stock de la cafetera como para lo que requiere una receta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngredientQuantities {
    pub water: u64,
    pub milk: u64,
    pub coffee_beans: u64,
}

impl IngredientQuantities {
    pub fn new(water: u64, milk: u64, coffee_beans: u64) -> IngredientQuantities {
        IngredientQuantities {
            water,
            milk,
            coffee_beans,
        }
    }

    /// Primer ingrediente (en orden agua, leche, granos) que no alcanza para `required`
    pub fn first_shortage(&self, required: &IngredientQuantities) -> Option<Resource> {
        if self.water < required.water {
            return Some(Resource::Water);
        }
        if self.milk < required.milk {
            return Some(Resource::Milk);
        }
        if self.coffee_beans < required.coffee_beans {
            return Some(Resource::CoffeeBeans);
        }
        None
    }

    /// Antes hay que verificar con `first_shortage`, el stock nunca queda negativo.
    pub fn consume(&mut self, required: &IngredientQuantities) {
        self.water -= required.water;
        self.milk -= required.milk;
        self.coffee_beans -= required.coffee_beans;
    }

    pub fn add(&mut self, other: &IngredientQuantities) {
        self.water = self.water.saturating_add(other.water);
        self.milk = self.milk.saturating_add(other.milk);
        self.coffee_beans = self.coffee_beans.saturating_add(other.coffee_beans);
    }
}
