//! Menu interactivo: lee comandos del operador y los ejecuta en la cafetera
use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::{
    coffee_machine::CoffeeMachine,
    command::{parse_fill_amount, Command, TokenReader},
    constants::{
        BACK_TOKEN, COFFEE_BEANS_PROMPT, CUPS_PROMPT, MAIN_PROMPT, MAKING_COFFEE, MILK_PROMPT,
        WATER_PROMPT,
    },
    errors::CoffeeMachineError,
    recipe::RecipeCatalog,
};

enum Flow {
    Continue,
    Stop,
}

pub struct Menu<R, W> {
    machine: CoffeeMachine,
    catalog: RecipeCatalog,
    tokens: TokenReader<R>,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(machine: CoffeeMachine, catalog: RecipeCatalog, input: R, output: W) -> Menu<R, W> {
        Menu {
            machine,
            catalog,
            tokens: TokenReader::new(input),
            output,
        }
    }

    pub fn machine(&self) -> &CoffeeMachine {
        &self.machine
    }

    /// Corre hasta `exit` o hasta que se termina la entrada
    pub fn run(&mut self) -> Result<(), CoffeeMachineError> {
        loop {
            let token = match self.prompt(MAIN_PROMPT)? {
                Some(token) => token,
                None => {
                    info!("[MENU] No more input, shutting down");
                    return Ok(());
                }
            };

            let flow = match Command::parse(&token) {
                Some(command) => {
                    debug!("[MENU] Running {:?}", command);
                    self.handle(command)?
                }
                None => {
                    debug!("[MENU] Ignored unknown command {}", token);
                    Flow::Continue
                }
            };
            match flow {
                Flow::Continue => writeln!(self.output)?,
                Flow::Stop => return Ok(()),
            }
        }
    }

    fn handle(&mut self, command: Command) -> Result<Flow, CoffeeMachineError> {
        match command {
            Command::Buy => self.buy(),
            Command::Fill => self.fill(),
            Command::Take => {
                writeln!(self.output)?;
                writeln!(self.output, "I gave you ${}", self.machine.take())?;
                Ok(Flow::Continue)
            }
            Command::Remaining => {
                writeln!(self.output)?;
                writeln!(self.output, "{}", self.machine.status())?;
                Ok(Flow::Continue)
            }
            Command::Exit => Ok(Flow::Stop),
        }
    }

    fn buy(&mut self) -> Result<Flow, CoffeeMachineError> {
        let prompt = format!(
            "\nWhat do you want to buy? {}: , {} - to main menu: ",
            self.catalog.menu_options(),
            BACK_TOKEN
        );
        let selector = match self.prompt(&prompt)? {
            Some(selector) => selector,
            None => return Ok(Flow::Stop),
        };
        if selector == BACK_TOKEN {
            return Ok(Flow::Continue);
        }

        let result = self
            .catalog
            .by_selector(&selector)
            .and_then(|recipe| self.machine.sell(recipe));
        match result {
            Ok(()) => writeln!(self.output, "{}", MAKING_COFFEE)?,
            Err(err @ CoffeeMachineError::NotEnough(_)) => writeln!(self.output, "{}", err)?,
            Err(err @ CoffeeMachineError::InvalidSelector(_)) => {
                warn!("[MENU] {}", err);
                writeln!(self.output, "{}", err)?;
            }
            Err(err) => return Err(err),
        }
        Ok(Flow::Continue)
    }

    fn fill(&mut self) -> Result<Flow, CoffeeMachineError> {
        writeln!(self.output)?;
        let mut amounts = [0; 4];
        let prompts = [WATER_PROMPT, MILK_PROMPT, COFFEE_BEANS_PROMPT, CUPS_PROMPT];
        for (amount, prompt) in amounts.iter_mut().zip(prompts) {
            *amount = match self.read_fill_amount(prompt)? {
                Some(value) => value,
                None => return Ok(Flow::Stop),
            };
        }
        let [water, milk, coffee_beans, disposable_cups] = amounts;
        self.machine.fill(water, milk, coffee_beans, disposable_cups);
        Ok(Flow::Continue)
    }

    /// Vuelve a preguntar hasta que el operador escribe una cantidad valida
    fn read_fill_amount(&mut self, prompt: &str) -> Result<Option<u64>, CoffeeMachineError> {
        loop {
            let token = match self.prompt(prompt)? {
                Some(token) => token,
                None => return Ok(None),
            };
            match parse_fill_amount(&token) {
                Ok(amount) => return Ok(Some(amount)),
                Err(err) => {
                    warn!("[MENU] {}", err);
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>, CoffeeMachineError> {
        write!(self.output, "{}\n> ", message)?;
        self.output.flush()?;
        self.tokens.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;

    const PROMPT: &str = "Write action (buy, fill, take, remaining, exit): \n> ";

    fn run(input: &str) -> (String, CoffeeMachine) {
        run_with(CoffeeMachine::default(), input)
    }

    fn run_with(machine: CoffeeMachine, input: &str) -> (String, CoffeeMachine) {
        let mut output = Vec::new();
        let mut menu = Menu::new(machine, RecipeCatalog::default(), input.as_bytes(), &mut output);
        menu.run().unwrap();
        let machine = menu.machine().clone();
        (String::from_utf8(output).unwrap(), machine)
    }

    #[test]
    fn should_print_the_remaining_resources() {
        let (output, _) = run("remaining\nexit\n");
        let expected = format!(
            "{}\nThe coffee machine has:\n400 ml of water\n540 ml of milk\n\
             120 g of coffee beans\n9 disposable cups\n$550 of money\n\n{}",
            PROMPT, PROMPT
        );
        assert_eq!(expected, output);
    }

    #[test]
    fn should_buy_an_espresso_and_then_fail_to_buy_a_latte() {
        let (output, machine) = run("buy 1\nbuy\n2\nexit\n");
        assert!(output.contains(
            "What do you want to buy? 1 - espresso, 2 - latte, 3 - cappuccino: , back - to main menu: \n> "
        ));
        assert!(output.contains("I have enough resources, making you a coffee!\n"));
        assert!(output.contains("Sorry, not enough water!\n"));

        let status = machine.status();
        assert_eq!(150, status.water);
        assert_eq!(540, status.milk);
        assert_eq!(104, status.coffee_beans);
        assert_eq!(8, status.disposable_cups);
        assert_eq!(554, status.money);
    }

    #[test]
    fn should_go_back_without_buying() {
        let (output, machine) = run("buy back\nexit\n");
        assert!(!output.contains("making you a coffee"));
        assert_eq!(CoffeeMachine::default(), machine);
    }

    #[test]
    fn should_survive_invalid_selections() {
        let (output, machine) = run("buy 7\nbuy latte\nbuy 3\nexit\n");
        assert!(output.contains("Invalid selection: 7\n"));
        assert!(output.contains("Invalid selection: latte\n"));
        assert!(output.contains("I have enough resources, making you a coffee!\n"));
        assert_eq!(556, machine.status().money);
    }

    #[test]
    fn should_fill_the_machine() {
        let (output, machine) = run("fill\n100\n20\n3\n4\nexit\n");
        assert!(output.contains("Write how many ml of water you want to add: \n> "));
        assert!(output.contains("Write how many disposable cups you want to add: \n> "));

        let status = machine.status();
        assert_eq!(500, status.water);
        assert_eq!(560, status.milk);
        assert_eq!(123, status.coffee_beans);
        assert_eq!(13, status.disposable_cups);
        assert_eq!(550, status.money);
    }

    #[test]
    fn should_ask_again_for_invalid_fill_amounts() {
        let (output, machine) = run("fill -10 ten 10 0 0 0\nexit\n");
        assert!(output.contains("Cannot add a negative amount: -10\n"));
        assert!(output.contains("Invalid number: ten\n"));
        assert_eq!(410, machine.status().water);
    }

    #[test]
    fn should_take_the_money_after_a_fill() {
        let (output, machine) = run("fill 100 0 0 0\ntake\ntake\nexit\n");
        assert!(output.contains("I gave you $550\n"));
        assert!(output.contains("I gave you $0\n"));
        assert_eq!(0, machine.status().money);
        assert_eq!(500, machine.status().water);
    }

    #[test]
    fn should_ignore_invalid_utf8_input() {
        let mut output = Vec::new();
        let input = &b"\xff\xfe\nremaining\nbuy \xff\nexit\n"[..];
        let mut menu = Menu::new(
            CoffeeMachine::default(),
            RecipeCatalog::default(),
            input,
            &mut output,
        );
        assert_eq!(Ok(()), menu.run());
        assert_eq!(&CoffeeMachine::default(), menu.machine());

        let output = String::from_utf8(output).unwrap();
        let expected_start = format!("{}\n{}\nThe coffee machine has:\n", PROMPT, PROMPT);
        assert!(output.starts_with(&expected_start));
        assert!(output.contains("Invalid selection: \u{FFFD}\n"));
    }

    #[test]
    fn should_ignore_unknown_commands() {
        let (output, machine) = run("coffee\nexit\n");
        assert_eq!(format!("{}\n{}", PROMPT, PROMPT), output);
        assert_eq!(CoffeeMachine::default(), machine);
    }

    #[test]
    fn should_stop_at_the_end_of_the_input() {
        let (output, machine) = run("fill 5 5");
        assert!(output.ends_with("Write how many grams of coffee beans you want to add: \n> "));
        assert_eq!(CoffeeMachine::default(), machine);
    }

    #[test]
    fn should_report_missing_cups() {
        let machine = CoffeeMachine::new(Recipe::latte().required, 0, 0);
        let (output, _) = run_with(machine, "buy 2\nexit\n");
        assert!(output.contains("Sorry, not enough disposable cup!\n"));
    }
}
