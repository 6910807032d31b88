use std::io::{self, Write};

/// Average nanoseconds per trial for each operation of one kind.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Averages {
    pub insert: f64,
    pub contains: f64,
    pub remove: f64,
    pub clear: f64,
}

/// Sink for finished runs, called once per kind in run order.
pub trait Reporter {
    fn report(&mut self, name: &str, averages: &Averages) -> io::Result<()>;
}

impl<'a, P: Reporter + ?Sized> Reporter for &'a mut P {
    fn report(&mut self, name: &str, averages: &Averages) -> io::Result<()> {
        (**self).report(name, averages)
    }
}

/// One block per kind:
///
/// ```text
/// ++++++ HashSet ++++++
/// Add operation : 41.20 ns
/// Contains operation : 30.10 ns
/// Remove operation : 35.00 ns
/// Clear operation : 120450.70 ns
/// ```
pub struct ConsoleReporter<W> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> ConsoleReporter<io::Stdout> {
        ConsoleReporter::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> ConsoleReporter<W> {
        ConsoleReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, name: &str, averages: &Averages) -> io::Result<()> {
        writeln!(self.out, "++++++ {} ++++++", name)?;
        writeln!(self.out, "Add operation : {:.2} ns", averages.insert)?;
        writeln!(self.out, "Contains operation : {:.2} ns", averages.contains)?;
        writeln!(self.out, "Remove operation : {:.2} ns", averages.remove)?;
        writeln!(self.out, "Clear operation : {:.2} ns", averages.clear)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// One aligned row per kind, under a header written before the first row.
pub struct TableReporter<W> {
    out: W,
    header: bool,
}

impl TableReporter<io::Stdout> {
    pub fn stdout() -> TableReporter<io::Stdout> {
        TableReporter::new(io::stdout())
    }
}

impl<W: Write> TableReporter<W> {
    pub fn new(out: W) -> TableReporter<W> {
        TableReporter { out, header: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TableReporter<W> {
    fn report(&mut self, name: &str, averages: &Averages) -> io::Result<()> {
        if !self.header {
            writeln!(
                self.out,
                "{:<16}{:>14}{:>14}{:>14}{:>16}",
                "container", "add ns", "contains ns", "remove ns", "clear ns"
            )?;
            self.header = true;
        }
        writeln!(
            self.out,
            "{:<16}{:>14.1}{:>14.1}{:>14.1}{:>16.1}",
            name,
            averages.insert,
            averages.contains,
            averages.remove,
            averages.clear
        )?;
        self.out.flush()
    }
}
