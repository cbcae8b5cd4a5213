use crate::{
    config::HmtlConfig,
    error::{HmtlError, Result},
    log_info, log_warn,
    protocol::{encode_header, encode_output, Command, RecordType},
    session::{RecordFailurePolicy, Session, TransferReport},
    util::io::LineTransport,
};

impl<T: LineTransport> Session<T> {
    /// Send an entire configuration: `start`, header, each output, `end`.
    ///
    /// Every record is encoded before the first byte goes out, so a range error
    /// never leaves the module half configured. Failures on `start`, `end` and
    /// the header always abort; output failures follow the record failure policy.
    /// An aborted transfer closes the session.
    pub async fn send_configuration(&mut self, config: &HmtlConfig) -> Result<TransferReport> {
        log_info!("***** Sending configuration *****");

        let header = encode_header(config)?;
        let outputs = config
            .outputs
            .iter()
            .enumerate()
            .map(|(index, output)| {
                encode_output(index, output).map(|bytes| (output.record_type(), bytes))
            })
            .collect::<Result<Vec<(RecordType, Vec<u8>)>>>()?;

        let mut report = TransferReport::default();

        let result = self.send_command(Command::Start).await;
        self.close_on_error(result)?;

        let result = self.send_record(RecordType::Header, &header).await;
        self.close_on_error(result)?;
        report.records_sent += 1;

        for (index, (record_type, record)) in outputs.iter().enumerate() {
            match self.send_record(*record_type, record).await {
                Ok(()) => report.records_sent += 1,
                Err(HmtlError::ProtocolFail { command })
                    if self.config.record_failure_policy == RecordFailurePolicy::Continue =>
                {
                    log_warn!("Output {} ({}) rejected, continuing", index, command);
                    report.failed_outputs.push(index);
                }
                Err(e) => return self.close_on_error(Err(e)),
            }
        }

        let result = self.send_command(Command::End).await;
        self.close_on_error(result)?;

        log_info!(
            "Configuration sent: {} records acknowledged, {} rejected",
            report.records_sent,
            report.failed_outputs.len()
        );
        Ok(report)
    }
}
