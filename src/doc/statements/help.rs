/*!
# `HELP`

## Purpose
Print a summary of every statement.

## Remarks
Direct mode only.

*/
