//! Query intent for the `users` table.
//!
//! A [`UserQuery`] is built from named fields and optional predicates, then either rendered
//! to parameterised Postgres SQL or evaluated directly against in-memory entities.

use std::cmp::Ordering;

use sqlx::{Postgres, QueryBuilder};

use crate::modules::user::schema::{USERS_TABLE, UserEntity};
use crate::utils::pagination::Pageable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Name,
}

impl UserField {
    pub const ALL: [UserField; 2] = [UserField::Id, UserField::Name];

    pub fn column(self) -> &'static str {
        match self {
            UserField::Id => "id",
            UserField::Name => "name",
        }
    }

    fn value_of(self, user: &UserEntity) -> Value {
        match self {
            UserField::Id => Value::Int(user.id),
            UserField::Name => Value::Text(user.name.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Eq(UserField, Value),
}

impl Predicate {
    pub fn eq(field: UserField, value: impl Into<Value>) -> Self {
        Predicate::Eq(field, value.into())
    }

    /// `name = <name>`, or no predicate at all when `name` is absent.
    pub fn name_eq(name: Option<&str>) -> Option<Self> {
        name.map(|n| Predicate::eq(UserField::Name, n))
    }

    pub fn matches(&self, user: &UserEntity) -> bool {
        match self {
            Predicate::Eq(field, value) => field.value_of(user) == *value,
        }
    }

    fn push_sql(&self, qb: &mut QueryBuilder<'static, Postgres>) {
        match self {
            Predicate::Eq(field, value) => {
                qb.push(field.column()).push(" = ");
                push_value(qb, value);
            }
        }
    }
}

fn push_value(qb: &mut QueryBuilder<'static, Postgres>, value: &Value) {
    match value {
        Value::Int(v) => qb.push_bind(*v),
        Value::Text(v) => qb.push_bind(v.clone()),
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn keyword(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserQuery {
    predicates: Vec<Predicate>,
    order: Vec<(UserField, Direction)>,
    pageable: Option<Pageable>,
}

impl UserQuery {
    pub fn select_users() -> Self {
        Self { predicates: Vec::new(), order: Vec::new(), pageable: None }
    }

    /// Adds predicates joined with `AND`. Absent predicates are skipped.
    pub fn where_and<I>(mut self, predicates: I) -> Self
    where
        I: IntoIterator<Item = Option<Predicate>>,
    {
        self.predicates.extend(predicates.into_iter().flatten());
        self
    }

    pub fn order_by(mut self, field: UserField, direction: Direction) -> Self {
        self.order.push((field, direction));
        self
    }

    pub fn paged(mut self, pageable: Pageable) -> Self {
        self.pageable = Some(pageable);
        self
    }

    pub fn pageable(&self) -> Option<Pageable> {
        self.pageable
    }

    #[allow(unused)]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn matches(&self, user: &UserEntity) -> bool {
        self.predicates.iter().all(|p| p.matches(user))
    }

    pub fn compare(&self, a: &UserEntity, b: &UserEntity) -> Ordering {
        for (field, direction) in &self.order {
            let ord = field
                .value_of(a)
                .partial_cmp(&field.value_of(b))
                .unwrap_or(Ordering::Equal);
            let ord = match direction {
                Direction::Asc => ord,
                Direction::Desc => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    pub fn select_sql(&self) -> QueryBuilder<'static, Postgres> {
        let columns: Vec<&str> = UserField::ALL.iter().map(|f| f.column()).collect();
        let mut qb =
            QueryBuilder::new(format!("SELECT {} FROM {USERS_TABLE}", columns.join(", ")));
        self.push_where(&mut qb);

        for (i, (field, direction)) in self.order.iter().enumerate() {
            qb.push(if i == 0 { " ORDER BY " } else { ", " });
            qb.push(field.column()).push(" ").push(direction.keyword());
        }

        if let Some(pageable) = self.pageable {
            qb.push(" LIMIT ").push_bind(pageable.size());
            qb.push(" OFFSET ").push_bind(pageable.offset());
        }
        qb
    }

    fn push_where(&self, qb: &mut QueryBuilder<'static, Postgres>) {
        for (i, predicate) in self.predicates.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            predicate.push_sql(qb);
        }
    }
}
