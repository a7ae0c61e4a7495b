use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, Statement};
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    DisplayName,
    ContactId,
    Picture,
}

#[derive(DeriveIden)]
enum Drafts {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Seats {
    Table,
    Id,
    DraftId,
    Position,
    UserId,
    Round,
}

#[derive(DeriveIden)]
enum Packs {
    Table,
    Id,
    SeatId,
    OriginalSeatId,
    Round,
}

#[derive(DeriveIden)]
enum Cards {
    Table,
    Id,
    PackId,
    OriginalPackId,
    Data,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    DraftId,
    Position,
    Round,
    Announcement,
    Card1,
    Card2,
    Modified,
    CreatedAt,
}

/// Packs joined with their live card count. Emptiness checks and next-pack
/// ordering read from here.
const CREATE_PACK_COUNTS_VIEW: &str = "CREATE VIEW v_packs AS \
     SELECT packs.id, packs.seat_id, packs.original_seat_id, packs.round, \
            COUNT(cards.id) AS count \
     FROM packs \
     LEFT JOIN cards ON cards.pack_id = packs.id \
     GROUP BY packs.id, packs.seat_id, packs.original_seat_id, packs.round";

const DROP_PACK_COUNTS_VIEW: &str = "DROP VIEW IF EXISTS v_packs";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Users::DisplayName).string().not_null())
                    .col(ColumnDef::new(Users::ContactId).string().null())
                    .col(ColumnDef::new(Users::Picture).string().null())
                    .to_owned(),
            )
            .await?;

        // drafts
        manager
            .create_table(
                Table::create()
                    .table(Drafts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Drafts::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Drafts::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // seats
        manager
            .create_table(
                Table::create()
                    .table(Seats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Seats::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Seats::DraftId).big_integer().not_null())
                    .col(ColumnDef::new(Seats::Position).integer().not_null())
                    .col(ColumnDef::new(Seats::UserId).big_integer().null())
                    .col(
                        ColumnDef::new(Seats::Round)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seats_draft_id")
                            .from(Seats::Table, Seats::DraftId)
                            .to(Drafts::Table, Drafts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seats_user_id")
                            .from(Seats::Table, Seats::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_seats_draft_position")
                    .table(Seats::Table)
                    .col(Seats::DraftId)
                    .col(Seats::Position)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // packs
        manager
            .create_table(
                Table::create()
                    .table(Packs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Packs::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Packs::SeatId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Packs::OriginalSeatId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Packs::Round).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_packs_seat_id")
                            .from(Packs::Table, Packs::SeatId)
                            .to(Seats::Table, Seats::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_packs_original_seat_id")
                            .from(Packs::Table, Packs::OriginalSeatId)
                            .to(Seats::Table, Seats::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_packs_seat_round")
                    .table(Packs::Table)
                    .col(Packs::SeatId)
                    .col(Packs::Round)
                    .to_owned(),
            )
            .await?;

        // cards
        manager
            .create_table(
                Table::create()
                    .table(Cards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cards::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Cards::PackId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Cards::OriginalPackId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Cards::Data).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cards_pack_id")
                            .from(Cards::Table, Cards::PackId)
                            .to(Packs::Table, Packs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cards_original_pack_id")
                            .from(Cards::Table, Cards::OriginalPackId)
                            .to(Packs::Table, Packs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_cards_pack_id")
                    .table(Cards::Table)
                    .col(Cards::PackId)
                    .to_owned(),
            )
            .await?;

        // events
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Events::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Events::DraftId).big_integer().not_null())
                    .col(ColumnDef::new(Events::Position).integer().not_null())
                    .col(ColumnDef::new(Events::Round).integer().not_null())
                    .col(
                        ColumnDef::new(Events::Announcement)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Events::Card1).big_integer().not_null())
                    .col(ColumnDef::new(Events::Card2).big_integer().null())
                    .col(ColumnDef::new(Events::Modified).big_integer().not_null())
                    .col(
                        ColumnDef::new(Events::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_draft_id")
                            .from(Events::Table, Events::DraftId)
                            .to(Drafts::Table, Drafts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_events_draft_id")
                    .table(Events::Table)
                    .col(Events::DraftId)
                    .to_owned(),
            )
            .await?;

        // `fresh` only drops tables, so a stale view may survive it
        let backend = manager.get_database_backend();
        let conn = manager.get_connection();
        conn.execute(Statement::from_string(
            backend,
            DROP_PACK_COUNTS_VIEW.to_string(),
        ))
        .await?;
        conn.execute(Statement::from_string(
            backend,
            CREATE_PACK_COUNTS_VIEW.to_string(),
        ))
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order; the view depends on packs and cards
        let backend = manager.get_database_backend();
        manager
            .get_connection()
            .execute(Statement::from_string(
                backend,
                DROP_PACK_COUNTS_VIEW.to_string(),
            ))
            .await?;

        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Packs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Seats::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Drafts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}
