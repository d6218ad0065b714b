use std::fmt;

pub struct WorkflowCommand<'a> {
    name: &'a str,
    properties: Vec<(&'a str, &'a str)>,
    message: &'a str,
}

impl<'a> WorkflowCommand<'a> {
    pub fn new(name: &'a str, message: &'a str) -> Self {
        WorkflowCommand {
            name,
            properties: vec![],
            message,
        }
    }

    pub fn property(mut self, key: &'a str, value: &'a str) -> Self {
        self.properties.push((key, value));
        self
    }
}

impl fmt::Display for WorkflowCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::{}", self.name)?;

        for (index, (key, value)) in self.properties.iter().enumerate() {
            let separator = if index == 0 { " " } else { "," };
            write!(f, "{}{}={}", separator, key, escape_property(value))?;
        }

        write!(f, "::{}", escape_data(self.message))
    }
}

pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
