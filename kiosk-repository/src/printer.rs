use crate::{singleton::load_or_create, TouchScreenRepository};
use kiosk_error::{storage::StorageError, StorageResult};
use kiosk_models::{
    domain::prelude::{NewPrinter, TicketCommand, UpdatePrinter},
    entities::prelude::{Printer, PrinterActiveModel, PrinterModel},
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, IntoActiveModel, Set, TransactionTrait};
use tracing::info;

pub struct PrinterRepository;

impl PrinterRepository {
    /// Printer settings, created with defaults on first access.
    pub async fn get<C>(db: &C) -> StorageResult<PrinterModel>
    where
        C: ConnectionTrait,
    {
        load_or_create::<_, Printer, _>(db, NewPrinter::default().into_active_model()).await
    }

    pub async fn update<C>(db: &C, update: UpdatePrinter) -> StorageResult<PrinterModel>
    where
        C: ConnectionTrait,
    {
        let current = Self::get(db).await?;
        let mut active: PrinterActiveModel = update.into_active_model();
        if !active.is_changed() {
            return Ok(current);
        }
        active.id = Set(current.id);
        Ok(active.update(db).await?)
    }

    /// Switch between registered and printed tickets.
    ///
    /// The printer row and the touch screen `n` flag are written in one
    /// transaction: registered tickets deactivate the printer and set `n`,
    /// printed tickets activate it and clear `n`.
    pub async fn record_ticket<C>(db: &C, command: TicketCommand) -> StorageResult<PrinterModel>
    where
        C: TransactionTrait,
    {
        let registered = matches!(command, TicketCommand::Registered);
        let printer = db
            .transaction::<_, _, StorageError>(|txn| {
                Box::pin(async move {
                    let printer = Self::update(txn, UpdatePrinter::from(command)).await?;
                    TouchScreenRepository::set_registered(txn, registered).await?;
                    Ok(printer)
                })
            })
            .await?;
        info!(
            value = ?printer.value,
            active = printer.active,
            "ticket mode recorded"
        );
        Ok(printer)
    }
}
