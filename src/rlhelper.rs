// Copyright (C) 2020-2024 Andy Kurnia.

// https://github.com/kkawakam/rustyline/blob/master/examples/derive.rs

use super::{error, interact};
use rustyline_derive::{Completer, Helper, Highlighter, Hinter, Validator};

#[derive(Completer, Helper, Highlighter, Hinter, Validator)]
pub struct MyHelper {
    #[rustyline(Completer)]
    completer: rustyline::completion::FilenameCompleter,
    #[rustyline(Hinter)]
    hinter: rustyline::hint::HistoryHinter,
}

pub fn new_rl_editor()
-> rustyline::Result<rustyline::Editor<MyHelper, rustyline::history::DefaultHistory>> {
    let mut rl = rustyline::Editor::new()?;
    rl.set_helper(Some(MyHelper {
        completer: rustyline::completion::FilenameCompleter::new(),
        hinter: rustyline::hint::HistoryHinter::new(),
    }));
    Ok(rl)
}

// Lines starting with ':' are commands for the console itself and never reach
// the game, since words cannot contain ':'.
pub struct ReadlineInput {
    rl: rustyline::Editor<MyHelper, rustyline::history::DefaultHistory>,
    // lines queued by :source, popped from the back.
    cmd_stack: Vec<(String, String, usize)>,
    ended: bool,
}

impl ReadlineInput {
    pub fn new() -> error::Returns<Self> {
        Ok(Self {
            rl: new_rl_editor()?,
            cmd_stack: Vec::new(),
            ended: false,
        })
    }

    fn run_command(&mut self, line: &str) {
        let strings = match shell_words::split(line) {
            Ok(strings) => strings,
            Err(err) => {
                println!("Bad quoting: {:?}", err);
                return;
            }
        };
        match strings.first().map(|s| s.as_str()) {
            Some(":help") => {
                println!(":source <file>  feed the lines of a file as answers");
                println!(":help           this");
            }
            Some(":source") => {
                if strings.len() > 1 {
                    match std::fs::read_to_string(&strings[1]) {
                        Ok(whole_file) => {
                            let v = self.cmd_stack.len();
                            for (line_num, line) in (1..).zip(whole_file.lines()) {
                                self.cmd_stack
                                    .push((line.to_string(), strings[1].clone(), line_num));
                            }
                            self.cmd_stack[v..].reverse();
                        }
                        Err(err) => {
                            println!("cannot open file: {:?}", err);
                        }
                    }
                } else {
                    println!("need another arg");
                }
            }
            _ => {
                println!("invalid command, :help for help");
            }
        }
    }
}

impl interact::Input for ReadlineInput {
    fn next_input(&mut self, prompt: &str) -> Option<String> {
        while !self.ended {
            if let Some((line, filename, line_num)) = self.cmd_stack.pop() {
                println!("{}{}:{}> {}", prompt, filename, line_num, line);
                if line.starts_with(':') {
                    self.run_command(&line);
                    continue;
                }
                return Some(line);
            }
            match self.rl.readline(prompt) {
                Ok(line) => {
                    if line.starts_with(':') {
                        self.run_command(&line);
                        continue;
                    }
                    let _ = self.rl.add_history_entry(line.as_str());
                    return Some(line);
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    self.ended = true;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    self.ended = true;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    self.ended = true;
                }
            }
        }
        None
    }
}
