//! Referential actions taken when a row is destroyed.
//!
//! Every parent/child edge of the schema is listed in [`dependents`] with the
//! [`DeleteAction`] that applies to it. [`destroy`] walks those edges
//! depth-first inside a single transaction, so a destroy that is refused part
//! way down leaves every row exactly as it was.

use crate::{Error, Result};
use chrono::Utc;
use futures::future::{BoxFuture, FutureExt};
use log::{debug, info, warn};
use models::delete_action::DeleteAction;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait,
    sea_query::{Alias, Expr, Query},
};
use serde::Serialize;
use strum::{Display, EnumIter, IntoStaticStr};
use uuid::Uuid;

/// Tables taking part in referential actions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Table {
    Schools,
    Terms,
    Courses,
    Lessons,
    Readings,
    Assignments,
    CourseInstructors,
    CourseStudents,
    Users,
}

impl Table {
    pub fn name(self) -> &'static str {
        self.into()
    }

    fn iden(self) -> Alias {
        Alias::new(self.name())
    }
}

/// One parent-to-child edge: rows of `table` whose `foreign_key` points at the parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependent {
    pub table: Table,
    pub foreign_key: &'static str,
    pub action: DeleteAction,
}

impl Dependent {
    const fn cascade(table: Table, foreign_key: &'static str) -> Self {
        Self {
            table,
            foreign_key,
            action: DeleteAction::Cascade,
        }
    }

    const fn restrict(table: Table, foreign_key: &'static str) -> Self {
        Self {
            table,
            foreign_key,
            action: DeleteAction::Restrict,
        }
    }

    const fn nullify(table: Table, foreign_key: &'static str) -> Self {
        Self {
            table,
            foreign_key,
            action: DeleteAction::Nullify,
        }
    }
}

const SCHOOL_DEPENDENTS: &[Dependent] = &[Dependent::restrict(Table::Terms, "school_id")];

const TERM_DEPENDENTS: &[Dependent] = &[Dependent::restrict(Table::Courses, "term_id")];

const COURSE_DEPENDENTS: &[Dependent] = &[
    Dependent::restrict(Table::CourseInstructors, "course_id"),
    Dependent::restrict(Table::CourseStudents, "course_id"),
    Dependent::cascade(Table::Lessons, "course_id"),
    Dependent::cascade(Table::Assignments, "course_id"),
];

const LESSON_DEPENDENTS: &[Dependent] = &[Dependent::cascade(Table::Readings, "lesson_id")];

const ASSIGNMENT_DEPENDENTS: &[Dependent] = &[
    Dependent::nullify(Table::Lessons, "pre_class_assignment_id"),
    Dependent::nullify(Table::Lessons, "in_class_assignment_id"),
];

const USER_DEPENDENTS: &[Dependent] = &[
    Dependent::restrict(Table::CourseInstructors, "instructor_id"),
    Dependent::restrict(Table::CourseStudents, "student_id"),
];

/// The delete policy graph: every edge leaving `table`
pub fn dependents(table: Table) -> &'static [Dependent] {
    match table {
        Table::Schools => SCHOOL_DEPENDENTS,
        Table::Terms => TERM_DEPENDENTS,
        Table::Courses => COURSE_DEPENDENTS,
        Table::Lessons => LESSON_DEPENDENTS,
        Table::Assignments => ASSIGNMENT_DEPENDENTS,
        Table::Users => USER_DEPENDENTS,
        Table::Readings | Table::CourseInstructors | Table::CourseStudents => &[],
    }
}

/// Destroys one row, applying the delete policy of every table below it.
///
/// # Errors
/// * [`Error::NotFound`] if the row does not exist
/// * [`Error::ConstraintViolation`] if the row, or any row that would be
///   cascaded, still has restricted dependents. Nothing is deleted in that case.
pub async fn destroy(db: &DatabaseConnection, table: Table, id: Uuid) -> Result<()> {
    let txn = db.begin().await?;

    // Dropping the transaction on error rolls everything back
    destroy_row(&txn, table, id).await?;
    txn.commit().await?;

    info!("Destroyed {table} {id}");
    Ok(())
}

fn destroy_row(txn: &DatabaseTransaction, table: Table, id: Uuid) -> BoxFuture<'_, Result<()>> {
    async move {
        if !row_exists(txn, table, id).await? {
            return Err(Error::NotFound { table, id });
        }

        let edges = dependents(table);

        for edge in edges.iter().filter(|edge| edge.action.blocks()) {
            if has_dependents(txn, edge, id).await? {
                warn!(
                    "Refusing to destroy {table} {id}: {} still reference it",
                    edge.table
                );
                return Err(Error::ConstraintViolation {
                    table,
                    association: edge.table,
                });
            }
        }

        for edge in edges {
            match edge.action {
                DeleteAction::Cascade => {
                    let children = dependent_ids(txn, edge, id).await?;
                    debug!(
                        "Cascading {table} {id} to {} {}",
                        children.len(),
                        edge.table
                    );

                    for child in children {
                        destroy_row(txn, edge.table, child).await?;
                    }
                }
                DeleteAction::Nullify => clear_references(txn, edge, id).await?,
                DeleteAction::Restrict => {}
            }
        }

        let delete = Query::delete()
            .from_table(table.iden())
            .and_where(Expr::col(Alias::new("id")).eq(id))
            .to_owned();
        txn.execute(txn.get_database_backend().build(&delete))
            .await?;

        Ok(())
    }
    .boxed()
}

async fn row_exists<C: ConnectionTrait>(conn: &C, table: Table, id: Uuid) -> Result<bool> {
    let select = Query::select()
        .column(Alias::new("id"))
        .from(table.iden())
        .and_where(Expr::col(Alias::new("id")).eq(id))
        .limit(1)
        .to_owned();

    let row = conn
        .query_one(conn.get_database_backend().build(&select))
        .await?;
    Ok(row.is_some())
}

async fn has_dependents<C: ConnectionTrait>(conn: &C, edge: &Dependent, parent: Uuid) -> Result<bool> {
    let select = Query::select()
        .column(Alias::new("id"))
        .from(edge.table.iden())
        .and_where(Expr::col(Alias::new(edge.foreign_key)).eq(parent))
        .limit(1)
        .to_owned();

    let row = conn
        .query_one(conn.get_database_backend().build(&select))
        .await?;
    Ok(row.is_some())
}

async fn dependent_ids<C: ConnectionTrait>(
    conn: &C,
    edge: &Dependent,
    parent: Uuid,
) -> Result<Vec<Uuid>> {
    let select = Query::select()
        .column(Alias::new("id"))
        .from(edge.table.iden())
        .and_where(Expr::col(Alias::new(edge.foreign_key)).eq(parent))
        .to_owned();

    let rows = conn
        .query_all(conn.get_database_backend().build(&select))
        .await?;

    rows.iter()
        .map(|row| row.try_get::<Uuid>("", "id").map_err(Error::from))
        .collect()
}

async fn clear_references<C: ConnectionTrait>(conn: &C, edge: &Dependent, parent: Uuid) -> Result<()> {
    let update = Query::update()
        .table(edge.table.iden())
        .value(Alias::new(edge.foreign_key), Option::<Uuid>::None)
        .value(Alias::new("updated_at"), Utc::now().naive_utc())
        .and_where(Expr::col(Alias::new(edge.foreign_key)).eq(parent))
        .to_owned();

    let result = conn
        .execute(conn.get_database_backend().build(&update))
        .await?;
    debug!(
        "Cleared {}.{} on {} rows",
        edge.table,
        edge.foreign_key,
        result.rows_affected()
    );

    Ok(())
}

#[cfg(test)]
mod test {
    use super::{Table, dependents};
    use models::delete_action::DeleteAction;
    use strum::IntoEnumIterator;

    #[test]
    fn test_table_names() {
        assert_eq!(Table::CourseInstructors.name(), "course_instructors");
        assert_eq!(Table::Schools.to_string(), "schools");
    }

    #[test]
    fn test_course_policy() {
        let edges = dependents(Table::Courses);
        let restricted: Vec<_> = edges
            .iter()
            .filter(|edge| edge.action == DeleteAction::Restrict)
            .map(|edge| edge.table)
            .collect();
        let cascaded: Vec<_> = edges
            .iter()
            .filter(|edge| edge.action == DeleteAction::Cascade)
            .map(|edge| edge.table)
            .collect();

        assert_eq!(
            restricted,
            vec![Table::CourseInstructors, Table::CourseStudents]
        );
        assert_eq!(cascaded, vec![Table::Lessons, Table::Assignments]);
    }

    #[test]
    fn test_leaf_tables_have_no_dependents() {
        for table in Table::iter() {
            let leaf = matches!(
                table,
                Table::Readings | Table::CourseInstructors | Table::CourseStudents
            );
            assert_eq!(dependents(table).is_empty(), leaf, "{table}");
        }
    }

    #[test]
    fn test_no_table_depends_on_itself() {
        for table in Table::iter() {
            for edge in dependents(table) {
                assert_ne!(edge.table, table);
            }
        }
    }
}
