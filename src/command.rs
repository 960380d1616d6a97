//! Interpretacion de lo que escribe el operador
use std::collections::VecDeque;
use std::io::BufRead;

use crate::errors::CoffeeMachineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Buy,
    Fill,
    Take,
    Remaining,
    Exit,
}

impl Command {
    /// Distingue mayusculas de minusculas, lo desconocido lo ignora el menu
    pub fn parse(token: &str) -> Option<Command> {
        match token {
            "buy" => Some(Command::Buy),
            "fill" => Some(Command::Fill),
            "take" => Some(Command::Take),
            "remaining" => Some(Command::Remaining),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Separa la entrada en tokens por espacios, asi un comando y sus argumentos
/// pueden venir en la misma linea o en lineas distintas.
/// Los bytes que no son UTF-8 valido se reemplazan en vez de cortar la lectura.
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> TokenReader<R> {
        TokenReader {
            input,
            pending: VecDeque::new(),
        }
    }

    /// `None` cuando se termina la entrada
    pub fn next_token(&mut self) -> Result<Option<String>, CoffeeMachineError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&line);
            self.pending.extend(line.split_whitespace().map(String::from));
        }
    }
}

pub fn parse_fill_amount(token: &str) -> Result<u64, CoffeeMachineError> {
    if let Ok(amount) = token.parse::<u64>() {
        return Ok(amount);
    }
    match token.strip_prefix('-') {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            Err(CoffeeMachineError::NegativeFillAmount(token.to_string()))
        }
        _ => Err(CoffeeMachineError::InvalidNumber(token.to_string())),
    }
}
