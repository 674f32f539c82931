use std::io::{BufRead, Write};

use error_stack::{Report, ResultExt};
use tracing::{debug, info};

use crate::command::{dispatch, Command, LibraryServices, MenuChoice};
use crate::error::ShellError;
use crate::request::{
    AddBookRequest, CheckOutRequest, MemberLoansRequest, RegisterMemberRequest, ReturnRequest,
};

const MENU: &[&str] = &[
    "--- Library Menu ---",
    "1. List Available Books",
    "2. Check Out Book",
    "3. Return Book",
    "4. List Member's Loans",
    "5. Add New Book",
    "6. Register New Member",
    "0. Exit",
];

/// Line-oriented menu loop over any reader and writer.
pub struct Shell<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Runs until the exit choice or end of input.
    pub fn run<M: LibraryServices>(&mut self, module: &M) -> error_stack::Result<(), ShellError> {
        self.print("Welcome to the Library Management System!")?;
        loop {
            for line in MENU {
                self.print(line)?;
            }
            let Some(input) = self.prompt("Enter your choice: ")? else {
                info!("input closed");
                return Ok(());
            };
            match MenuChoice::try_from(input.as_str()) {
                Ok(MenuChoice::Exit) => {
                    self.print("Exiting system. Goodbye!")?;
                    self.print("")?;
                    return Ok(());
                }
                Ok(choice) => {
                    let Some(command) = self.read_command(choice)? else {
                        info!("input closed");
                        return Ok(());
                    };
                    debug!(?command, "dispatching");
                    match dispatch(module, command) {
                        Ok(lines) => {
                            for line in lines {
                                self.print(&line)?;
                            }
                        }
                        Err(message) => self.print(&message.to_string())?,
                    }
                }
                Err(report) => {
                    debug!("{report:?}");
                    self.print(&report.current_context().to_string())?;
                }
            }
            self.print("")?;
        }
    }

    /// Prompts for the fields a choice needs. `None` means input ended mid-way.
    fn read_command(
        &mut self,
        choice: MenuChoice,
    ) -> error_stack::Result<Option<Command>, ShellError> {
        let command = match choice {
            MenuChoice::ListAvailable => Some(Command::ListAvailable),
            MenuChoice::CheckOut => self
                .prompt_pair("Enter Member ID: ", "Enter Book ISBN: ")?
                .map(|(member_id, isbn)| Command::CheckOut(CheckOutRequest { member_id, isbn })),
            MenuChoice::Return => self
                .prompt_pair("Enter Member ID: ", "Enter Book ISBN: ")?
                .map(|(member_id, isbn)| Command::Return(ReturnRequest { member_id, isbn })),
            MenuChoice::ListLoans => self
                .prompt("Enter Member ID to list loans: ")?
                .map(|member_id| Command::ListLoans(MemberLoansRequest { member_id })),
            MenuChoice::AddBook => {
                let Some((isbn, title)) =
                    self.prompt_pair("Enter new Book ISBN: ", "Enter Book Title: ")?
                else {
                    return Ok(None);
                };
                self.prompt("Enter Book Author: ")?.map(|author| {
                    Command::AddBook(AddBookRequest {
                        isbn,
                        title,
                        author,
                    })
                })
            }
            MenuChoice::RegisterMember => self
                .prompt_pair("Enter new Member ID: ", "Enter Member Name: ")?
                .map(|(member_id, name)| {
                    Command::RegisterMember(RegisterMemberRequest { member_id, name })
                }),
            MenuChoice::Exit => None,
        };
        Ok(command)
    }

    fn prompt_pair(
        &mut self,
        first: &str,
        second: &str,
    ) -> error_stack::Result<Option<(String, String)>, ShellError> {
        let Some(a) = self.prompt(first)? else {
            return Ok(None);
        };
        Ok(self.prompt(second)?.map(|b| (a, b)))
    }

    fn prompt(&mut self, text: &str) -> error_stack::Result<Option<String>, ShellError> {
        write!(self.writer, "{text}")
            .and_then(|_| self.writer.flush())
            .change_context_lazy(|| ShellError::Io)?;
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .change_context_lazy(|| ShellError::Io)
            .attach_printable_lazy(|| "Failed to read console input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn print(&mut self, line: &str) -> error_stack::Result<(), ShellError> {
        writeln!(self.writer, "{line}")
            .map_err(|error| Report::new(error).change_context(ShellError::Io))
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use driver::clock::ManualClock;
    use driver::config::LibraryConfig;
    use kernel::interface::clock::DependOnClock;
    use time::macros::date;

    use crate::error::ShellError;
    use crate::handler::AppModule;
    use crate::shell::Shell;

    fn app() -> error_stack::Result<AppModule<ManualClock>, ShellError> {
        let app = AppModule::with_clock(
            ManualClock::new(date!(2026 - 10 - 16)),
            &LibraryConfig::default(),
        );
        app.seed_demo()
            .map_err(|report| report.change_context(ShellError::Setup))?;
        Ok(app)
    }

    fn session(
        app: &AppModule<ManualClock>,
        input: &str,
    ) -> error_stack::Result<String, ShellError> {
        let mut output = Vec::new();
        Shell::new(Cursor::new(input.as_bytes()), &mut output).run(&**app)?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    #[test]
    fn check_out_list_and_return() -> error_stack::Result<(), ShellError> {
        let app = app()?;
        let output = session(
            &app,
            "2\nM001\n978-0451524935\n4\nM001\n1\n3\nM001\n978-0451524935\n0\n",
        )?;
        assert!(output.starts_with("Welcome to the Library Management System!\n"));
        assert!(output.contains(
            "Success: Alice Smith checked out '1984'.\nDue Date: 2026-10-30\n"
        ));
        assert!(output.contains(
            "--- Loans for Alice Smith ---\nBook [ISBN: 978-0451524935, Title: '1984', Author: 'George Orwell', Status: Checked Out (Due: 2026-10-30)]\n"
        ));
        assert!(output.contains("Book returned on time.\nSuccess: Alice Smith returned '1984'.\n"));
        assert!(output.ends_with("Exiting system. Goodbye!\n\n"));
        Ok(())
    }

    #[test]
    fn overdue_return_reports_fine() -> error_stack::Result<(), ShellError> {
        let app = app()?;
        session(&app, "2\nM002\n978-0743273565\n")?;
        app.clock().advance(20);
        let output = session(&app, "4\nM002\n3\nM002\n978-0743273565\n")?;
        assert!(output.contains("  -> Current Fine: $3.00\n"));
        assert!(output.contains(
            "Book is overdue! Fine: $3.00\nSuccess: Bob Johnson returned 'The Great Gatsby'.\n"
        ));
        Ok(())
    }

    #[test]
    fn invalid_input_reprompts() -> error_stack::Result<(), ShellError> {
        let app = app()?;
        let output = session(&app, "abc\n9\n0\n")?;
        assert!(output.contains("Invalid input. Please enter a number.\n"));
        assert!(output.contains("Invalid choice. Please try again.\n"));
        assert_eq!(output.matches("--- Library Menu ---").count(), 3);
        Ok(())
    }

    #[test]
    fn input_ending_mid_command_stops_quietly() -> error_stack::Result<(), ShellError> {
        let app = app()?;
        let output = session(&app, "2\nM001\n")?;
        assert!(output.ends_with("Enter Member ID: Enter Book ISBN: "));
        assert!(!output.contains("Goodbye"));

        let output = session(&app, "1\n")?;
        assert!(output.contains("Title: '1984', Author: 'George Orwell', Status: Available]\n"));
        assert!(!output.contains("Goodbye"));
        Ok(())
    }

    #[test]
    fn errors_are_reported_and_loop_continues() -> error_stack::Result<(), ShellError> {
        let app = app()?;
        let output = session(
            &app,
            concat!(
                "2\nM001\nunknown\n",
                "2\nnobody\n978-0451524935\n",
                "2\nM001\n978-0451524935\n",
                "2\nM002\n978-0451524935\n",
                "3\nM002\n978-0451524935\n",
                "5\n978-0451524935\nAnother\nSomeone\n",
                "6\nM001\nCarol\n",
                "4\nnobody\n",
                "0\n"
            ),
        )?;
        assert!(output.contains("Error: Book not found.\n"));
        assert!(output.contains("Error: Member not found.\n"));
        assert!(output.contains("Error: Book is already checked out.\n"));
        assert!(output.contains("Error: This member did not borrow this book.\n"));
        assert!(output.contains("Error: Book with this ISBN already exists.\n"));
        assert!(output.contains("Error: Member with this ID already exists.\n"));
        assert!(output.ends_with("Exiting system. Goodbye!\n\n"));
        Ok(())
    }

    #[test]
    fn add_register_and_list() -> error_stack::Result<(), ShellError> {
        let app = app()?;
        let output = session(
            &app,
            "5\nX1\nDune\nFrank Herbert\n6\nM003\nCarol White\n2\nM003\nX1\n4\nM003\n1\n",
        )?;
        assert!(output.contains("Book added: Dune\n"));
        assert!(output.contains("Member registered: Carol White\n"));
        assert!(output.contains("Success: Carol White checked out 'Dune'.\n"));
        assert!(output.contains("--- Available Books ---\n"));
        let available = output.split("--- Available Books ---").nth(1).unwrap_or_default();
        assert!(!available.contains("ISBN: X1,"));
        assert!(available.contains("ISBN: 978-0321765723,"));
        Ok(())
    }

    #[test]
    fn member_without_loans() -> error_stack::Result<(), ShellError> {
        let app = app()?;
        let output = session(&app, "4\nM002\n")?;
        assert!(output.contains(
            "--- Loans for Bob Johnson ---\nThis member has no books checked out.\n"
        ));
        Ok(())
    }
}
