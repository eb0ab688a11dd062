use anyhow::Result;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Writes one rendered sentence per line, `\r\n` terminated.
pub struct NmeaWriter<W: AsyncWrite + Unpin> {
    writer: W,
    sentences_written: u64,
}

impl<W: AsyncWrite + Unpin> NmeaWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentences_written: 0,
        }
    }

    pub async fn write_sentence(&mut self, sentence: &str) -> Result<()> {
        self.writer.write_all(sentence.as_bytes()).await?;
        self.writer.write_all(b"\r\n").await?;
        self.writer.flush().await?;
        self.sentences_written += 1;
        Ok(())
    }

    pub fn sentences_written(&self) -> u64 {
        self.sentences_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
