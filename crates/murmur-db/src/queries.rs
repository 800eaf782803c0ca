use murmur_types::models::{Account, Message, NewAccount, NewMessage};
use rusqlite::{Connection, Params};
use tracing::{debug, warn};

use crate::models::{AccountRow, MessageRow};
use crate::store::{AccountStore, MessageStore};
use crate::{Database, DbError, Result};

impl AccountStore for Database {
    fn insert_account(&self, candidate: NewAccount) -> Result<Option<Account>> {
        let inserted = self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO account (username, password) VALUES (?1, ?2)",
                (&candidate.username, &candidate.password),
            )?;
            Ok(conn.last_insert_rowid())
        });

        match inserted {
            Ok(account_id) => Ok(Some(Account::from_new(account_id, candidate))),
            Err(e) if e.is_constraint_violation() => {
                warn!(username = %candidate.username, "Account insert rejected: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn account_by_username(&self, username: &str) -> Result<Option<Account>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {} FROM account WHERE username = ?1", AccountRow::COLUMNS);
            query_one(conn, &sql, [username], AccountRow::decode)
        })
        .map(|row| row.map(Account::from))
    }

    fn all_accounts(&self) -> Result<Vec<Account>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {} FROM account ORDER BY account_id", AccountRow::COLUMNS);
            query_all(conn, &sql, [], AccountRow::decode)
        })
        .map(|rows| rows.into_iter().map(Account::from).collect())
    }
}

impl MessageStore for Database {
    fn insert_message(&self, candidate: NewMessage) -> Result<Option<Message>> {
        let inserted = self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO message (posted_by, message_text, time_posted_epoch) VALUES (?1, ?2, ?3)",
                (
                    candidate.posted_by,
                    &candidate.message_text,
                    candidate.time_posted_epoch,
                ),
            )?;
            Ok(conn.last_insert_rowid())
        });

        match inserted {
            Ok(message_id) => Ok(Some(Message::from_new(message_id, candidate))),
            Err(e) if e.is_constraint_violation() => {
                warn!(posted_by = candidate.posted_by, "Message insert rejected: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn all_messages(&self) -> Result<Vec<Message>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {} FROM message ORDER BY message_id", MessageRow::COLUMNS);
            query_all(conn, &sql, [], MessageRow::decode)
        })
        .map(|rows| rows.into_iter().map(Message::from).collect())
    }

    fn message_by_id(&self, message_id: i64) -> Result<Option<Message>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {} FROM message WHERE message_id = ?1", MessageRow::COLUMNS);
            query_one(conn, &sql, [message_id], MessageRow::decode)
        })
        .map(|row| row.map(Message::from))
    }

    fn update_message_text(&self, message_id: i64, message_text: &str) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let changed = conn.execute(
                "UPDATE message SET message_text = ?1 WHERE message_id = ?2",
                (message_text, message_id),
            )?;
            debug!(message_id, changed, "Message text updated");
            Ok(changed)
        })
    }

    fn delete_message(&self, message_id: i64) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let removed = conn.execute("DELETE FROM message WHERE message_id = ?1", [message_id])?;
            debug!(message_id, removed, "Message deleted");
            Ok(removed)
        })
    }

    fn messages_by_account(&self, account_id: i64) -> Result<Vec<Message>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {} FROM message WHERE posted_by = ?1 ORDER BY message_id",
                MessageRow::COLUMNS
            );
            query_all(conn, &sql, [account_id], MessageRow::decode)
        })
        .map(|rows| rows.into_iter().map(Message::from).collect())
    }
}

fn query_one<T, P, F>(conn: &Connection, sql: &str, params: P, decode: F) -> Result<Option<T>>
where
    P: Params,
    F: Fn(&rusqlite::Row<'_>) -> std::result::Result<T, DbError>,
{
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;

    match rows.next()? {
        Some(row) => Ok(Some(decode(row)?)),
        None => Ok(None),
    }
}

fn query_all<T, P, F>(conn: &Connection, sql: &str, params: P, decode: F) -> Result<Vec<T>>
where
    P: Params,
    F: Fn(&rusqlite::Row<'_>) -> std::result::Result<T, DbError>,
{
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;

    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        out.push(decode(row)?);
    }
    Ok(out)
}
