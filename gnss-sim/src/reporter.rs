use std::time::Duration;

use anyhow::Result;
use log::{debug, info, warn};
use nmea_builder::{SentenceBuilder, SentenceType};
use tokio::io::AsyncWrite;
use tokio::sync::mpsc::Receiver;
use tokio::time::{interval, MissedTickBehavior};

use crate::display::StatusScreen;
use crate::field_command::FieldCommand;
use crate::transport::NmeaWriter;

#[derive(Debug, Clone, PartialEq)]
pub enum ReporterCommand {
    Apply(FieldCommand),
    ShowStatus,
}

/// Owns the builder and sends the selected sentences once per reporting cycle.
pub struct Reporter<W: AsyncWrite + Unpin> {
    builder: SentenceBuilder,
    writer: NmeaWriter<W>,
    sentences: Vec<SentenceType>,
}

async fn next_command(commands: &mut Option<Receiver<ReporterCommand>>) -> Option<ReporterCommand> {
    match commands {
        Some(commands) => commands.recv().await,
        None => std::future::pending().await,
    }
}

impl<W: AsyncWrite + Unpin> Reporter<W> {
    pub fn new(builder: SentenceBuilder, writer: NmeaWriter<W>, sentences: Vec<SentenceType>) -> Self {
        Self {
            builder,
            writer,
            sentences,
        }
    }

    pub fn builder(&self) -> &SentenceBuilder {
        &self.builder
    }

    pub fn into_writer(self) -> NmeaWriter<W> {
        self.writer
    }

    pub fn handle(&mut self, command: ReporterCommand) {
        match command {
            ReporterCommand::Apply(command) => {
                debug!("Applying {:?}", command);
                command.apply(&mut self.builder);
            }
            ReporterCommand::ShowStatus => {
                println!("{}", StatusScreen(&self.builder));
            }
        }
    }

    /// Renders and writes every selected sentence. A sentence with missing fields is skipped
    /// for this cycle, the rest still go out. Returns how many were written.
    pub async fn report_once(&mut self) -> Result<usize> {
        let mut written = 0;
        for sentence_type in &self.sentences {
            match self.builder.render(*sentence_type) {
                Ok(sentence) => {
                    self.writer.write_sentence(&sentence).await?;
                    written += 1;
                }
                Err(e) => warn!("Skipping {}: {}", sentence_type, e),
            }
        }
        Ok(written)
    }

    /// Reports every `period` until `cycles` have run or the command channel closes.
    /// Commands are applied between cycles.
    pub async fn run(
        &mut self,
        period: Duration,
        cycles: Option<u64>,
        mut commands: Option<Receiver<ReporterCommand>>,
    ) -> Result<()> {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut cycle = 0u64;

        while cycles.map_or(true, |cycles| cycle < cycles) {
            tokio::select! {
                _ = ticker.tick() => {
                    let written = self.report_once().await?;
                    cycle += 1;
                    debug!("Cycle {}: {} sentence(s) written", cycle, written);
                }
                command = next_command(&mut commands) => match command {
                    Some(command) => self.handle(command),
                    None => {
                        info!("Console closed");
                        break;
                    }
                },
            }
        }

        info!(
            "Stopped after {} cycle(s), {} sentence(s) written",
            cycle,
            self.writer.sentences_written()
        );
        Ok(())
    }
}
