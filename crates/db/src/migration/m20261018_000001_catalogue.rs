//! Migration to create the catalogue product and product attribute tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CatalogueProduct::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CatalogueProduct::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CatalogueProduct::Structure)
                            .string_len(10)
                            .not_null()
                            .default("standalone"),
                    )
                    .col(ColumnDef::new(CatalogueProduct::Upc).string_len(64).null())
                    .col(
                        ColumnDef::new(CatalogueProduct::Title)
                            .string_len(255)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CatalogueProductattribute::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CatalogueProductattribute::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CatalogueProductattribute::Code)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CatalogueProductattribute::Name)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CatalogueProductattribute::Type)
                            .string_len(20)
                            .not_null()
                            .default("text"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CatalogueProductattributevalue::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CatalogueProductattributevalue::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CatalogueProductattributevalue::ProductId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CatalogueProductattributevalue::AttributeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CatalogueProductattributevalue::ValueText)
                            .text()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_productattributevalue_product")
                            .from(
                                CatalogueProductattributevalue::Table,
                                CatalogueProductattributevalue::ProductId,
                            )
                            .to(CatalogueProduct::Table, CatalogueProduct::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_productattributevalue_attribute")
                            .from(
                                CatalogueProductattributevalue::Table,
                                CatalogueProductattributevalue::AttributeId,
                            )
                            .to(
                                CatalogueProductattribute::Table,
                                CatalogueProductattribute::Id,
                            )
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One value per attribute per product
        manager
            .create_index(
                Index::create()
                    .name("idx_productattributevalue_product_attribute")
                    .table(CatalogueProductattributevalue::Table)
                    .col(CatalogueProductattributevalue::ProductId)
                    .col(CatalogueProductattributevalue::AttributeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_productattribute_code")
                    .table(CatalogueProductattribute::Table)
                    .col(CatalogueProductattribute::Code)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(CatalogueProductattributevalue::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(CatalogueProductattribute::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(CatalogueProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CatalogueProduct {
    Table,
    Id,
    Structure,
    Upc,
    Title,
}

#[derive(DeriveIden)]
enum CatalogueProductattribute {
    Table,
    Id,
    Code,
    Name,
    Type,
}

#[derive(DeriveIden)]
enum CatalogueProductattributevalue {
    Table,
    Id,
    ProductId,
    AttributeId,
    ValueText,
}
