//! The record type all strategies operate on.

use std::fmt;

/// A single generated person record.
///
/// Every field is fixed at construction; the processing strategies only
/// ever read records, clone them into their results, and leave the source
/// set untouched. Duplicates are permitted and expected, so there is no
/// identity beyond structural equality.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: u8,
    pub street: String,
    pub married: bool,
    pub occupation: String,
    /// Drawn as an integer and stored as a float.
    pub salary: f64,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        writeln!(f, "    name: {}", self.name)?;
        writeln!(f, "    age: {}", self.age)?;
        writeln!(f, "    street: {}", self.street)?;
        writeln!(f, "    married: {}", self.married)?;
        writeln!(f, "    occupation: {}", self.occupation)?;
        writeln!(f, "    salary: {}", self.salary)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_lists_every_field() {
        let person = Person {
            name: "Hans".to_owned(),
            age: 42,
            street: "Main Street".to_owned(),
            married: true,
            occupation: "Teacher".to_owned(),
            salary: 1234.0,
        };

        let text = person.to_string();

        assert!(text.contains("name: Hans"));
        assert!(text.contains("age: 42"));
        assert!(text.contains("street: Main Street"));
        assert!(text.contains("married: true"));
        assert!(text.contains("occupation: Teacher"));
        assert!(text.contains("salary: 1234"));
    }
}
