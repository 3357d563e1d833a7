/*!
# `QUIT`

## Purpose
Leave BASIC.

## Remarks
Direct mode only. The program in memory is lost.

*/
