pub const SCHEMA: &str = r#"
# The query root.
schema {
  query: Query
  mutation: Mutation
}

scalar DateTime @specifiedBy(url: "https://example.com/datetime")

interface Node {
  id: ID!
}

# A person with an account.
#
#   Indented detail line.
type User implements Node @key(fields: "id") {
  id: ID!
  name: String
  email: String!
  createdAt: DateTime
  friends(first: Int = 10, after: String): [User!]!
  role: Role
}

enum Role {
  ADMIN
  MEMBER
  GUEST @deprecated(reason: "Use MEMBER.")
}

union SearchResult = User | Post

type Post implements Node {
  id: ID!
  title: String!
  body: String
  author: User!
  tags: [String!]
}

input PostInput {
  title: String!
  body: String
  tags: [String!] = []
}

type Query {
  node(id: ID!): Node
  search(text: String!, limit: Int = 20): [SearchResult!]!
  me: User
}

type Mutation {
  createPost(input: PostInput!): Post
}

extend type User {
  posts(first: Int): [Post!]!
}

directive @key(fields: String!) on OBJECT | INTERFACE
"#;

pub const COMPLEX_QUERY: &str = r#"
query Dashboard($id: ID!, $first: Int = 10, $withPosts: Boolean!) {
  me {
    ...UserFields
    friends(first: $first) {
      edges { node { ...UserFields } }
    }
  }
  node(id: $id) {
    id
    ... on User @include(if: $withPosts) {
      posts(first: 5) { title tags }
    }
    ... on Post { title author { name } }
  }
  search(text: "graphql é", limit: 3) {
    __typename
  }
}

mutation CreatePost($input: PostInput!) {
  createPost(input: $input) { id }
}

fragment UserFields on User {
  id
  name
  role
  settings(filter: { kind: PRIVATE, ids: [1, 2, 3], ratio: 0.5, enabled: true })
}
"#;

pub mod operations;
